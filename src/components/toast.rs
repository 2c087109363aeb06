//! Toast Notifications
//!
//! Renders the user-visible side of the error reporter: queued toasts are
//! drained on a short poll, shown bottom-right, and expire on their own or
//! on click.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use promptdeck_core::Toast;

use crate::context::use_error_reporter;

/// How long a toast stays on screen.
pub const TOAST_DISMISS_AFTER: Duration = Duration::from_secs(6);

/// Queue drain cadence.
const TOAST_POLL: Duration = Duration::from_millis(500);

#[derive(Clone, PartialEq)]
struct ActiveToast {
    id: u64,
    toast: Toast,
    shown_at: Instant,
}

/// Host surface for reporter toasts. Mount once, near the root.
#[component]
pub fn ToastHost() -> Element {
    let reporter = use_error_reporter();
    let mut toasts: Signal<Vec<ActiveToast>> = use_signal(Vec::new);
    let mut next_id = use_signal(|| 0u64);

    // Drain the queue and expire old toasts on one cadence
    {
        let reporter = reporter.clone();
        use_effect(move || {
            let reporter = reporter.clone();
            spawn(async move {
                loop {
                    tokio::time::sleep(TOAST_POLL).await;

                    for toast in reporter.take_pending() {
                        let id = next_id();
                        next_id.set(id + 1);
                        toasts.write().push(ActiveToast {
                            id,
                            toast,
                            shown_at: Instant::now(),
                        });
                    }

                    let expired = toasts
                        .read()
                        .iter()
                        .any(|t| t.shown_at.elapsed() >= TOAST_DISMISS_AFTER);
                    if expired {
                        toasts
                            .write()
                            .retain(|t| t.shown_at.elapsed() < TOAST_DISMISS_AFTER);
                    }
                }
            });
        });
    }

    rsx! {
        div { class: "toast-host",
            for active in toasts().into_iter() {
                {
                    let id = active.id;
                    rsx! {
                        div {
                            key: "{id}",
                            class: "toast",
                            role: "status",
                            onclick: move |_| {
                                toasts.write().retain(|t| t.id != id);
                            },
                            span { class: "toast-message", "{active.toast.message}" }
                            span { class: "toast-source", "{active.toast.source}" }
                        }
                    }
                }
            }
        }
    }
}
