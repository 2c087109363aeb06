//! Backend Health Banner
//!
//! Polls the health monitor on a fixed interval and renders a dismissible
//! warning while the backend is unreachable. Renders nothing at all while
//! the last-known status is available.

use std::time::Duration;

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::context::use_health_monitor;

/// How often the banner re-checks backend health. A policy choice, not an
/// invariant; tune freely.
pub const HEALTH_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Properties for the HealthBanner component
#[derive(Clone, PartialEq, Props)]
pub struct HealthBannerProps {
    /// When supplied, a dismiss control is rendered and invokes this handler
    #[props(default)]
    pub on_dismiss: Option<EventHandler<()>>,
}

/// Backend availability warning.
///
/// Checks once on mount, then every [`HEALTH_POLL_INTERVAL`] until unmount;
/// the poll task is scoped to the component, so teardown cancels it. The
/// manual retry is disabled while any check is in flight; an in-flight
/// probe is never cancelled, just never duplicated.
#[component]
pub fn HealthBanner(props: HealthBannerProps) -> Element {
    let monitor = use_health_monitor();
    let mut status = use_signal({
        let monitor = monitor.clone();
        move || monitor.current_status()
    });
    let mut checking = use_signal(|| false);
    let mut expanded = use_signal(|| false);

    // Initial check plus the poll loop
    {
        let monitor = monitor.clone();
        use_effect(move || {
            let monitor = monitor.clone();
            spawn(async move {
                loop {
                    checking.set(true);
                    let latest = monitor.check_backend_health().await;
                    status.set(latest);
                    checking.set(false);
                    tokio::time::sleep(HEALTH_POLL_INTERVAL).await;
                }
            });
        });
    }

    let retry = {
        let monitor = monitor.clone();
        move |_| {
            if checking() {
                return;
            }
            checking.set(true);
            let monitor = monitor.clone();
            spawn(async move {
                let latest = monitor.check_backend_health().await;
                status.set(latest);
                checking.set(false);
            });
        }
    };

    let current = status();
    if current.available {
        return rsx! {};
    }

    let base_url = monitor.base_url().to_string();

    rsx! {
        div { class: "health-banner", role: "alert",
            div { class: "health-banner-row",
                span { class: "health-banner-icon", "\u{26A0}" }
                span { class: "health-banner-text",
                    "backend unreachable, generation and profile sync are unavailable"
                }

                button {
                    class: "btn-compact",
                    disabled: checking(),
                    onclick: retry,
                    if checking() {
                        "checking..."
                    } else {
                        "Retry"
                    }
                }

                button {
                    class: "btn-compact",
                    onclick: move |_| expanded.set(!expanded()),
                    if expanded() {
                        "hide details"
                    } else {
                        "details"
                    }
                }

                if let Some(dismiss) = props.on_dismiss {
                    button {
                        class: "icon-btn",
                        "aria-label": "Dismiss",
                        onclick: move |_| dismiss.call(()),
                        "\u{00D7}"
                    }
                }
            }

            if expanded() {
                div { class: "health-banner-details",
                    div { class: "detail-row",
                        span { class: "detail-label", "last checked" }
                        span { class: "detail-value", "{format_checked_at(&current.last_checked)}" }
                    }
                    if let Some(error) = &current.error {
                        div { class: "detail-row",
                            span { class: "detail-label", "last error" }
                            span { class: "detail-value", "{error}" }
                        }
                    }
                    div { class: "detail-row",
                        span { class: "detail-label", "expected backend" }
                        span { class: "detail-value", "{base_url}" }
                    }
                }
            }
        }
    }
}

/// Compact UTC timestamp for the detail panel.
fn format_checked_at(checked_at: &DateTime<Utc>) -> String {
    checked_at.format("%H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_checked_at() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        assert_eq!(format_checked_at(&ts), "09:26:53 UTC");
    }

    #[test]
    fn test_poll_interval_is_thirty_seconds() {
        assert_eq!(HEALTH_POLL_INTERVAL, Duration::from_secs(30));
    }
}
