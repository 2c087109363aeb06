//! Workbench page, the single PromptDeck view.
//!
//! Composes the component set: the health banner across the top, the model
//! profile list inside a themed scroll area, the create/edit profile dialog
//! built from the field presets, and error boundaries at page, section and
//! component granularity.

use std::time::Duration;

use dioxus::prelude::*;

use crate::components::forms::{
    NumberField, SelectField, SelectOption, SliderField, SliderMark, SwitchField, TextField,
    DESCRIPTION_FIELD, EMAIL_FIELD, MAX_TOKENS_FIELD, NAME_FIELD, TEMPERATURE_FIELD, URL_FIELD,
};
use crate::components::{
    Boundary, BoundaryLevel, DialogMode, EntityDialog, HealthBanner, ScrollArea,
};
use crate::context::use_theme_mode;

/// Generation settings bundle the workbench edits.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelProfile {
    pub name: String,
    pub description: String,
    pub contact_email: String,
    pub backend_url: String,
    /// Preferred quantization; empty string means server default
    pub quantization: String,
    pub temperature: f64,
    /// `None` defers to the server's limit
    pub max_tokens: Option<f64>,
    pub streaming: bool,
}

impl Default for ModelProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            contact_email: String::new(),
            backend_url: String::new(),
            quantization: String::new(),
            temperature: 0.7,
            max_tokens: None,
            streaming: true,
        }
    }
}

impl ModelProfile {
    /// One-line summary for the profile card.
    fn summary(&self) -> String {
        let tokens = match self.max_tokens {
            Some(n) => n.to_string(),
            None => "server default".to_string(),
        };
        let quant = if self.quantization.is_empty() {
            "server default"
        } else {
            &self.quantization
        };
        format!(
            "temp {:.1} · max tokens {} · {}",
            self.temperature, tokens, quant
        )
    }
}

/// The main (and only) page.
#[component]
pub fn Workbench() -> Element {
    let mut theme = use_theme_mode();

    let mut profiles: Signal<Vec<ModelProfile>> = use_signal(|| {
        vec![ModelProfile {
            name: "balanced".to_string(),
            description: "general purpose defaults".to_string(),
            backend_url: crate::backend_config().base_url,
            ..Default::default()
        }]
    });
    let mut selected: Signal<Option<usize>> = use_signal(|| None);

    // Dialog state; the dialog itself only reflects these
    let mut dialog_open = use_signal(|| false);
    let mut editing: Signal<Option<usize>> = use_signal(|| None);
    let mut draft: Signal<ModelProfile> = use_signal(ModelProfile::default);
    let mut submitting = use_signal(|| false);
    let mut name_error: Signal<Option<String>> = use_signal(|| None);

    let mut banner_dismissed = use_signal(|| false);

    let open_create = move |_| {
        draft.set(ModelProfile {
            backend_url: crate::backend_config().base_url,
            ..Default::default()
        });
        editing.set(None);
        name_error.set(None);
        dialog_open.set(true);
    };

    let mut open_edit = move |idx: usize| {
        let Some(profile) = profiles().get(idx).cloned() else {
            return;
        };
        draft.set(profile);
        editing.set(Some(idx));
        name_error.set(None);
        dialog_open.set(true);
    };

    let close_dialog = move |_| {
        if !submitting() {
            dialog_open.set(false);
        }
    };

    let submit = move |_| {
        if submitting() {
            return;
        }
        if draft().name.trim().is_empty() {
            name_error.set(Some("name is required".to_string()));
            return;
        }

        submitting.set(true);
        spawn(async move {
            // Brief hold so a fast save does not strobe the busy state
            tokio::time::sleep(Duration::from_millis(150)).await;

            let profile = draft();
            match editing() {
                Some(idx) => {
                    if let Some(slot) = profiles.write().get_mut(idx) {
                        *slot = profile;
                    }
                    tracing::info!(index = idx, "Updated model profile");
                }
                None => {
                    profiles.write().push(profile);
                    tracing::info!("Created model profile");
                }
            }

            submitting.set(false);
            dialog_open.set(false);
        });
    };

    let dialog_mode = match editing() {
        Some(_) => DialogMode::Edit,
        None => DialogMode::Create,
    };

    let (t_min, t_max, t_step) = TEMPERATURE_FIELD
        .kind
        .slider_bounds()
        .unwrap_or((0.0, 2.0, 0.1));
    let (m_min, m_max, m_step) = MAX_TOKENS_FIELD
        .kind
        .number_bounds()
        .unwrap_or((1.0, 32768.0, 1.0));

    rsx! {
        div { class: "workbench",
            header { class: "workbench-header",
                h1 { class: "app-title", "PromptDeck" }
                div { class: "header-actions",
                    span { class: "backend-hint", "{crate::backend_config().base_url}" }
                    button {
                        class: "btn-compact",
                        onclick: move |_| theme.set(theme().toggled()),
                        if theme().is_dark() {
                            "light mode"
                        } else {
                            "dark mode"
                        }
                    }
                }
            }

            if !banner_dismissed() {
                HealthBanner { on_dismiss: move |_| banner_dismissed.set(true) }
            }

            Boundary { name: "workbench", level: BoundaryLevel::Page,
                main { class: "workbench-main",
                    Boundary { name: "profiles", level: BoundaryLevel::Section,
                        section { class: "workbench-section",
                            div { class: "section-toolbar",
                                h2 { class: "section-header", "Model profiles" }
                                button {
                                    class: "btn-primary",
                                    onclick: open_create,
                                    "Add profile"
                                }
                            }

                            ScrollArea { max_height: "18rem",
                                if profiles().is_empty() {
                                    p { class: "empty-hint",
                                        "no profiles yet. add one to get started"
                                    }
                                } else {
                                    div { class: "profile-list",
                                        for (idx, profile) in profiles().into_iter().enumerate() {
                                            {
                                                let summary = profile.summary();
                                                rsx! {
                                                    div {
                                                        key: "{idx}-{profile.name}",
                                                        class: "profile-card",
                                                        div {
                                                            div { class: "profile-card-name", "{profile.name}" }
                                                            div { class: "profile-card-meta", "{summary}" }
                                                        }
                                                        div { class: "header-actions",
                                                            button {
                                                                class: "btn-compact",
                                                                onclick: move |_| selected.set(Some(idx)),
                                                                "preview"
                                                            }
                                                            button {
                                                                class: "btn-compact",
                                                                onclick: move |_| open_edit(idx),
                                                                "edit"
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if let Some(idx) = selected() {
                        if let Some(profile) = profiles().get(idx).cloned() {
                            section { class: "workbench-section",
                                div { class: "section-toolbar",
                                    h2 { class: "section-header", "Preview" }
                                    button {
                                        class: "icon-btn",
                                        "aria-label": "Close preview",
                                        onclick: move |_| selected.set(None),
                                        "\u{00D7}"
                                    }
                                }
                                Boundary {
                                    name: "profile-preview",
                                    level: BoundaryLevel::Component,
                                    auto_recover: true,
                                    ProfilePreview { profile: profile }
                                }
                            }
                        }
                    }
                }
            }

            EntityDialog {
                show: dialog_open(),
                mode: dialog_mode,
                entity: "profile",
                submitting: submitting(),
                on_close: close_dialog,
                on_submit: submit,

                TextField {
                    label: NAME_FIELD.label.to_string(),
                    value: draft().name,
                    required: NAME_FIELD.required,
                    helper: NAME_FIELD.helper.to_string(),
                    error: name_error(),
                    on_change: move |v| {
                        name_error.set(None);
                        draft.write().name = v;
                    },
                }

                TextField {
                    label: DESCRIPTION_FIELD.label.to_string(),
                    value: draft().description,
                    multiline: true,
                    rows: 3,
                    helper: DESCRIPTION_FIELD.helper.to_string(),
                    on_change: move |v| draft.write().description = v,
                }

                TextField {
                    label: URL_FIELD.label.to_string(),
                    value: draft().backend_url,
                    input_type: URL_FIELD.kind.input_type().to_string(),
                    required: URL_FIELD.required,
                    helper: URL_FIELD.helper.to_string(),
                    on_change: move |v| draft.write().backend_url = v,
                }

                TextField {
                    label: EMAIL_FIELD.label.to_string(),
                    value: draft().contact_email,
                    input_type: EMAIL_FIELD.kind.input_type().to_string(),
                    helper: EMAIL_FIELD.helper.to_string(),
                    on_change: move |v| draft.write().contact_email = v,
                }

                SelectField {
                    label: "Quantization",
                    value: draft().quantization,
                    placeholder: "server default".to_string(),
                    options: vec![
                        SelectOption::new("q4_k_m", "Q4_K_M (small)"),
                        SelectOption::new("q8_0", "Q8_0 (balanced)"),
                        SelectOption::new("f16", "F16 (full precision)"),
                    ],
                    on_change: move |v| draft.write().quantization = v,
                }

                SliderField {
                    label: TEMPERATURE_FIELD.label.to_string(),
                    value: draft().temperature,
                    min: t_min,
                    max: t_max,
                    step: t_step,
                    helper: TEMPERATURE_FIELD.helper.to_string(),
                    format_value: Callback::new(|v: f64| format!("{v:.1}")),
                    marks: vec![
                        SliderMark::new(0.0, "precise"),
                        SliderMark::new(1.0, "balanced"),
                        SliderMark::new(2.0, "wild"),
                    ],
                    on_change: move |v| draft.write().temperature = v,
                }

                NumberField {
                    label: MAX_TOKENS_FIELD.label.to_string(),
                    value: draft().max_tokens,
                    min: m_min,
                    max: m_max,
                    step: m_step,
                    helper: MAX_TOKENS_FIELD.helper.to_string(),
                    on_change: move |v| draft.write().max_tokens = v,
                }

                SwitchField {
                    label: "Stream tokens",
                    checked: draft().streaming,
                    helper: "emit tokens as they are generated".to_string(),
                    on_toggle: move |on| draft.write().streaming = on,
                }
            }
        }
    }
}

/// JSON rendering of a profile, as the backend would receive it.
///
/// Serialization flows through `?`, so a failure here is caught by the
/// enclosing component-level boundary.
#[component]
fn ProfilePreview(profile: ModelProfile) -> Element {
    let payload = serde_json::json!({
        "name": profile.name,
        "description": profile.description,
        "contact_email": profile.contact_email,
        "backend_url": profile.backend_url,
        "quantization": if profile.quantization.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::Value::String(profile.quantization.clone())
        },
        "temperature": profile.temperature,
        "max_tokens": profile.max_tokens,
        "stream": profile.streaming,
    });
    let json = serde_json::to_string_pretty(&payload)?;

    rsx! {
        pre { class: "profile-preview", "{json}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_leans_balanced() {
        let profile = ModelProfile::default();
        assert_eq!(profile.temperature, 0.7);
        assert!(profile.streaming);
        assert!(profile.max_tokens.is_none());
    }

    #[test]
    fn test_summary_spells_out_server_defaults() {
        let profile = ModelProfile::default();
        let summary = profile.summary();
        assert!(summary.contains("temp 0.7"));
        assert!(summary.contains("max tokens server default"));
    }

    #[test]
    fn test_summary_with_explicit_limits() {
        let profile = ModelProfile {
            max_tokens: Some(4096.0),
            quantization: "q8_0".to_string(),
            ..Default::default()
        };
        let summary = profile.summary();
        assert!(summary.contains("max tokens 4096"));
        assert!(summary.contains("q8_0"));
    }
}
