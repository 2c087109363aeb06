//! Component-Level Error Boundary
//!
//! `Boundary` wraps Dioxus's built-in `ErrorBoundary` and standardizes what
//! happens when a descendant fails to render: the failure is reported to
//! the shared error reporter exactly once per throw, a fallback scoped to
//! the boundary's nesting level is shown, and the subtree can recover
//! either manually or on a one-shot timer.

use std::time::Duration;

use dioxus::document;
use dioxus::prelude::*;

use crate::context::use_error_reporter;
use promptdeck_core::{ReportContext, ReportOptions};

/// Default delay before an auto-recovering boundary retries its subtree.
/// A policy choice, not an invariant; override per boundary via props.
pub const DEFAULT_RECOVERY_DELAY_MS: u64 = 5_000;

/// Where in the tree a boundary sits.
///
/// Coarser levels render richer fallbacks. Only the innermost level asks
/// for a toast, so nested boundaries do not stack duplicate notifications
/// for the same failure.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BoundaryLevel {
    /// Whole-page boundary: full-viewport panel with reload actions
    Page,
    /// Page-section boundary: compact inline panel with retry
    Section,
    /// Single-component boundary: minimal inline alert with retry
    #[default]
    Component,
}

impl BoundaryLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryLevel::Page => "page",
            BoundaryLevel::Section => "section",
            BoundaryLevel::Component => "component",
        }
    }

    /// Whether an error at this level requests a user-visible toast.
    pub fn requests_toast(&self) -> bool {
        matches!(self, BoundaryLevel::Component)
    }
}

/// Properties for the Boundary component
#[derive(Clone, PartialEq, Props)]
pub struct BoundaryProps {
    /// Name used in error reports; defaults to the level name
    #[props(default)]
    pub name: Option<String>,
    #[props(default)]
    pub level: BoundaryLevel,
    /// Retry the subtree automatically after `recovery_delay_ms`
    #[props(default = false)]
    pub auto_recover: bool,
    #[props(default = DEFAULT_RECOVERY_DELAY_MS)]
    pub recovery_delay_ms: u64,
    /// Caller-supplied fallback; always wins over the level rendering
    #[props(default)]
    pub fallback: Option<Element>,
    /// Invoked with the error text after a descendant throws
    #[props(default)]
    pub on_error: Option<EventHandler<String>>,
    /// Page-level "go home" action, rendered only when provided
    #[props(default)]
    pub on_navigate_home: Option<EventHandler<()>>,
    pub children: Element,
}

/// Error boundary with level-scoped fallbacks and optional auto-recovery.
///
/// # Example
///
/// ```ignore
/// Boundary {
///     name: "profile-preview",
///     level: BoundaryLevel::Component,
///     auto_recover: true,
///     ProfilePreview { profile }
/// }
/// ```
#[component]
pub fn Boundary(props: BoundaryProps) -> Element {
    let name = props
        .name
        .clone()
        .unwrap_or_else(|| props.level.as_str().to_string());
    let level = props.level;
    let auto_recover = props.auto_recover;
    let recovery_delay_ms = props.recovery_delay_ms;
    let fallback = props.fallback.clone();
    let on_error = props.on_error;
    let on_navigate_home = props.on_navigate_home;

    rsx! {
        ErrorBoundary {
            handle_error: move |errors: ErrorContext| {
                let message = errors
                    .errors()
                    .first()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "unrecoverable render failure".to_string());
                let details = if cfg!(debug_assertions) {
                    let debug = errors
                        .errors()
                        .first()
                        .map(|e| format!("{e:?}"))
                        .unwrap_or_default();
                    Some(format_diagnostics(&name, level, &message, &debug))
                } else {
                    None
                };
                let reset_context = errors.clone();

                rsx! {
                    BoundaryFallback {
                        name: name.clone(),
                        level: level,
                        auto_recover: auto_recover,
                        recovery_delay_ms: recovery_delay_ms,
                        message: message,
                        details: details,
                        custom: fallback.clone(),
                        on_error: on_error,
                        on_navigate_home: on_navigate_home,
                        on_reset: move |_| reset_context.clear_errors(),
                    }
                }
            },
            {props.children}
        }
    }
}

/// Properties for the fallback renderer
#[derive(Clone, PartialEq, Props)]
struct BoundaryFallbackProps {
    name: String,
    level: BoundaryLevel,
    auto_recover: bool,
    recovery_delay_ms: u64,
    message: String,
    details: Option<String>,
    custom: Option<Element>,
    on_error: Option<EventHandler<String>>,
    on_navigate_home: Option<EventHandler<()>>,
    /// Clears the captured errors and re-renders the subtree
    on_reset: EventHandler<()>,
}

/// Errored-state renderer.
///
/// Mounts fresh for every throw, so its mount effects run exactly once per
/// transition into the error state. Unmounting (boundary teardown or reset)
/// drops the pending recovery task with it.
#[component]
fn BoundaryFallback(props: BoundaryFallbackProps) -> Element {
    let reporter = use_error_reporter();
    let mut auto_recovering = use_signal(|| false);
    let on_reset = props.on_reset;

    // Report the failure
    {
        let reporter = reporter.clone();
        let name = props.name.clone();
        let message = props.message.clone();
        let details = props.details.clone();
        let level = props.level;
        let on_error = props.on_error;
        use_effect(move || {
            reporter.handle_error(
                &message,
                ReportContext::new(format!("boundary:{name}"), "render").with_data(
                    serde_json::json!({
                        "level": level.as_str(),
                        "details": details,
                    }),
                ),
                ReportOptions {
                    show_toast: level.requests_toast(),
                    log_to_console: true,
                },
            );
            if let Some(handler) = on_error {
                handler.call(message.clone());
            }
        });
    }

    // One-shot recovery timer
    {
        let auto = props.auto_recover;
        let delay = props.recovery_delay_ms;
        use_effect(move || {
            if auto {
                auto_recovering.set(true);
                spawn(async move {
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    on_reset.call(());
                });
            }
        });
    }

    // A caller-supplied fallback always wins over the level rendering
    if let Some(custom) = props.custom.clone() {
        return rsx! {
            {custom}
        };
    }

    match props.level {
        BoundaryLevel::Page => rsx! {
            PageErrorPanel {
                message: props.message.clone(),
                details: props.details.clone(),
                recovering: auto_recovering(),
                on_retry: move |_| on_reset.call(()),
                on_navigate_home: props.on_navigate_home,
            }
        },
        BoundaryLevel::Section => rsx! {
            div { class: "error-inline", role: "alert",
                span { "this section failed to render" }
                span { class: "hint-text", "{props.message}" }
                div { class: "error-inline-actions",
                    button {
                        class: "btn-compact",
                        onclick: move |_| on_reset.call(()),
                        "Retry"
                    }
                    if auto_recovering() {
                        span { class: "recovering-hint", "retrying automatically..." }
                    }
                }
            }
        },
        BoundaryLevel::Component => rsx! {
            div { class: "error-alert", role: "alert",
                span { class: "error-alert-icon", "\u{26A0}" }
                span { "failed to render" }
                button {
                    class: "inline-link-btn",
                    onclick: move |_| on_reset.call(()),
                    "retry"
                }
                if auto_recovering() {
                    span { class: "recovering-hint", "retrying automatically..." }
                }
            }
        },
    }
}

/// Full-viewport fallback for page-level boundaries.
#[component]
fn PageErrorPanel(
    message: String,
    details: Option<String>,
    recovering: bool,
    on_retry: EventHandler<()>,
    #[props(default)] on_navigate_home: Option<EventHandler<()>>,
) -> Element {
    let mut copied = use_signal(|| false);

    let copy_details = {
        let details = details.clone();
        move |_| {
            let Some(text) = details.clone() else {
                return;
            };
            spawn(async move {
                match arboard::Clipboard::new() {
                    Ok(mut clipboard) => {
                        if clipboard.set_text(&text).is_ok() {
                            copied.set(true);
                            tokio::time::sleep(Duration::from_secs(2)).await;
                            copied.set(false);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Clipboard not available: {}", e);
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "error-panel-page", role: "alert",
            h1 { class: "error-panel-title", "something went wrong" }
            p { class: "error-panel-message", "{message}" }

            div { class: "error-panel-actions",
                button {
                    class: "btn-primary",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
                if let Some(home) = on_navigate_home {
                    button {
                        class: "btn-ghost",
                        onclick: move |_| home.call(()),
                        "Go home"
                    }
                }
                button {
                    class: "btn-ghost",
                    onclick: move |_| {
                        let _ = document::eval("window.location.reload();");
                    },
                    "Reload app"
                }
            }

            if recovering {
                span { class: "recovering-hint", "retrying automatically..." }
            }

            if let Some(text) = &details {
                pre { class: "error-details", "{text}" }
                button {
                    class: "btn-compact",
                    onclick: copy_details,
                    if copied() {
                        "copied"
                    } else {
                        "copy details"
                    }
                }
            }
        }
    }
}

/// Developer-facing diagnostic block. Compiled into reports only in debug
/// builds; release builds carry the plain message alone.
fn format_diagnostics(name: &str, level: BoundaryLevel, message: &str, debug: &str) -> String {
    format!(
        "boundary: {name} (level: {})\nerror: {message}\ndebug: {debug}",
        level.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_requested_only_at_component_level() {
        assert!(BoundaryLevel::Component.requests_toast());
        assert!(!BoundaryLevel::Section.requests_toast());
        assert!(!BoundaryLevel::Page.requests_toast());
    }

    #[test]
    fn test_default_level_is_component() {
        assert_eq!(BoundaryLevel::default(), BoundaryLevel::Component);
    }

    #[test]
    fn test_default_recovery_delay() {
        assert_eq!(DEFAULT_RECOVERY_DELAY_MS, 5_000);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(BoundaryLevel::Page.as_str(), "page");
        assert_eq!(BoundaryLevel::Section.as_str(), "section");
        assert_eq!(BoundaryLevel::Component.as_str(), "component");
    }

    #[test]
    fn test_diagnostics_carry_identity_and_error() {
        let text = format_diagnostics(
            "profile-preview",
            BoundaryLevel::Component,
            "json sour",
            "Error { .. }",
        );
        assert!(text.contains("boundary: profile-preview (level: component)"));
        assert!(text.contains("error: json sour"));
        assert!(text.contains("debug: Error { .. }"));
    }
}
