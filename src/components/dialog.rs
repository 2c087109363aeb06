//! Modal Dialog Components
//!
//! `Dialog` standardizes the modal chrome: overlay, title, opaque body
//! content, and a Cancel/Submit action row with busy-state handling.
//! `EntityDialog` specializes it for create/edit entity forms.

use dioxus::prelude::*;

/// Properties for the Dialog component
#[derive(Clone, PartialEq, Props)]
pub struct DialogProps {
    /// Whether the dialog is visible; owned by the parent
    pub show: bool,
    pub title: String,
    /// Generic close handler (overlay click, Escape, the corner button, and
    /// the Cancel fallback)
    pub on_close: EventHandler<()>,
    /// Explicit cancel handler; Cancel falls back to `on_close` without it
    #[props(default)]
    pub on_cancel: Option<EventHandler<()>>,
    /// Submit handler; the Submit button is rendered only when present
    #[props(default)]
    pub on_submit: Option<EventHandler<()>>,
    /// While true, both action buttons are disabled and the submit label is
    /// swapped for a busy indicator; owned by the parent
    #[props(default = false)]
    pub submitting: bool,
    #[props(default = "Save".to_string())]
    pub submit_label: String,
    #[props(default = "Cancel".to_string())]
    pub cancel_label: String,
    pub children: Element,
}

/// Generic modal wrapper.
///
/// Stateless with respect to visibility and submission: it only reflects
/// the `show` and `submitting` props its parent owns.
#[component]
pub fn Dialog(props: DialogProps) -> Element {
    let on_close = props.on_close;
    let on_cancel = props.on_cancel;
    let on_submit = props.on_submit;
    let submitting = props.submitting;

    // Explicit cancel handler wins; otherwise fall back to close
    let handle_cancel = move |_| {
        if let Some(cancel) = on_cancel {
            cancel.call(());
        } else {
            on_close.call(());
        }
    };

    let on_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Escape && !submitting {
            on_close.call(());
        }
    };

    if !props.show {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| {
                if !submitting {
                    on_close.call(());
                }
            },

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),
                onkeydown: on_keydown,

                header { class: "modal-header",
                    h2 { class: "section-header", "{props.title}" }
                    button {
                        class: "modal-close-btn",
                        "aria-label": "Close",
                        disabled: submitting,
                        onclick: move |_| on_close.call(()),
                        "\u{00D7}"
                    }
                }

                div { class: "modal-body", {props.children} }

                footer { class: "modal-footer",
                    button {
                        class: "btn-ghost",
                        disabled: submitting,
                        onclick: handle_cancel,
                        "{props.cancel_label}"
                    }

                    if on_submit.is_some() {
                        button {
                            class: "btn-primary",
                            disabled: submitting,
                            onclick: move |_| {
                                if let Some(submit) = on_submit {
                                    submit.call(());
                                }
                            },
                            if submitting {
                                span { class: "busy-spinner" }
                                "working..."
                            } else {
                                "{props.submit_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Create vs. edit flavor for [`EntityDialog`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DialogMode {
    Create,
    Edit,
}

impl DialogMode {
    /// Default title for an entity form in this mode.
    pub fn default_title(&self, entity: &str) -> String {
        match self {
            DialogMode::Create => format!("Add {entity}"),
            DialogMode::Edit => format!("Edit {entity}"),
        }
    }

    /// Default submit verb for this mode.
    pub fn default_submit_label(&self) -> &'static str {
        match self {
            DialogMode::Create => "Create",
            DialogMode::Edit => "Update",
        }
    }
}

/// Properties for the EntityDialog component
#[derive(Clone, PartialEq, Props)]
pub struct EntityDialogProps {
    pub show: bool,
    /// Selects the default title and submit verb
    pub mode: DialogMode,
    /// Entity noun used in the default title, e.g. "profile"
    pub entity: String,
    /// Overrides the mode-derived title
    #[props(default)]
    pub title: Option<String>,
    /// Overrides the mode-derived submit verb
    #[props(default)]
    pub submit_label: Option<String>,
    pub on_close: EventHandler<()>,
    #[props(default)]
    pub on_cancel: Option<EventHandler<()>>,
    pub on_submit: EventHandler<()>,
    #[props(default = false)]
    pub submitting: bool,
    pub children: Element,
}

/// Create/edit specialization of [`Dialog`].
#[component]
pub fn EntityDialog(props: EntityDialogProps) -> Element {
    let title = props
        .title
        .clone()
        .unwrap_or_else(|| props.mode.default_title(&props.entity));
    let submit_label = props
        .submit_label
        .clone()
        .unwrap_or_else(|| props.mode.default_submit_label().to_string());

    let on_close = props.on_close;
    let on_cancel = props.on_cancel;
    let on_submit = props.on_submit;

    rsx! {
        Dialog {
            show: props.show,
            title: title,
            submit_label: submit_label,
            submitting: props.submitting,
            on_close: on_close,
            on_cancel: move |_| {
                if let Some(cancel) = on_cancel {
                    cancel.call(());
                } else {
                    on_close.call(());
                }
            },
            on_submit: move |_| on_submit.call(()),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mode_defaults() {
        assert_eq!(DialogMode::Create.default_title("profile"), "Add profile");
        assert_eq!(DialogMode::Create.default_submit_label(), "Create");
    }

    #[test]
    fn test_edit_mode_defaults() {
        assert_eq!(DialogMode::Edit.default_title("profile"), "Edit profile");
        assert_eq!(DialogMode::Edit.default_submit_label(), "Update");
    }

    #[test]
    fn test_explicit_title_wins_over_mode() {
        let explicit = Some("Clone profile".to_string());
        let resolved = explicit.unwrap_or_else(|| DialogMode::Create.default_title("profile"));
        assert_eq!(resolved, "Clone profile");
    }
}
