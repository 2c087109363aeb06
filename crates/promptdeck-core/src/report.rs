//! Error reporting collaborator.
//!
//! Components route caught failures here instead of logging ad hoc. A report
//! is a structured `tracing` event plus, when requested, a queued toast that
//! the UI drains and shows. Reporting never fails: at worst a toast is
//! dropped when the queue is full.

use std::collections::VecDeque;
use std::fmt::Display;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Oldest toasts are dropped beyond this, so a throwing render loop cannot
/// grow the queue without bound.
const MAX_PENDING_TOASTS: usize = 8;

/// Where an error came from and what was being attempted.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportContext {
    /// Subsystem or component that caught the error
    pub source: String,
    /// Operation in flight when it was caught
    pub operation: String,
    /// Free-form structured metadata attached to the log event
    pub additional_data: Option<Value>,
}

impl ReportContext {
    pub fn new(source: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            operation: operation.into(),
            additional_data: None,
        }
    }

    /// Attach structured metadata to the report.
    pub fn with_data(mut self, data: Value) -> Self {
        self.additional_data = Some(data);
        self
    }
}

/// Delivery knobs for a single report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    /// Queue a user-visible toast
    pub show_toast: bool,
    /// Emit a tracing event
    pub log_to_console: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            show_toast: false,
            log_to_console: true,
        }
    }
}

/// A queued user-visible notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub message: String,
    pub source: String,
}

/// Error-handling collaborator shared by every component.
#[derive(Default)]
pub struct ErrorReporter {
    pending: Mutex<VecDeque<Toast>>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error.
    ///
    /// Logs a structured event when `log_to_console` is set and queues a
    /// toast when `show_toast` is set. Never panics, never returns an error.
    pub fn handle_error(&self, error: &dyn Display, context: ReportContext, options: ReportOptions) {
        if options.log_to_console {
            tracing::error!(
                source = %context.source,
                operation = %context.operation,
                data = ?context.additional_data,
                "{error}"
            );
        }

        if options.show_toast {
            let mut pending = self.pending.lock();
            if pending.len() >= MAX_PENDING_TOASTS {
                pending.pop_front();
            }
            pending.push_back(Toast {
                message: error.to_string(),
                source: context.source,
            });
        }
    }

    /// Drain every queued toast, oldest first.
    pub fn take_pending(&self) -> Vec<Toast> {
        self.pending.lock().drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(reporter: &ErrorReporter, message: &str, show_toast: bool) {
        reporter.handle_error(
            &message,
            ReportContext::new("test", "render"),
            ReportOptions {
                show_toast,
                log_to_console: false,
            },
        );
    }

    #[test]
    fn test_toast_queued_only_when_requested() {
        let reporter = ErrorReporter::new();
        report(&reporter, "silent", false);
        report(&reporter, "loud", true);

        let toasts = reporter.take_pending();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "loud");
        assert_eq!(toasts[0].source, "test");
    }

    #[test]
    fn test_take_pending_drains() {
        let reporter = ErrorReporter::new();
        report(&reporter, "once", true);

        assert_eq!(reporter.take_pending().len(), 1);
        assert!(reporter.take_pending().is_empty());
    }

    #[test]
    fn test_queue_is_bounded() {
        let reporter = ErrorReporter::new();
        for i in 0..20 {
            report(&reporter, &format!("toast {i}"), true);
        }

        let toasts = reporter.take_pending();
        assert_eq!(toasts.len(), MAX_PENDING_TOASTS);
        // Oldest entries were dropped
        assert_eq!(toasts[0].message, "toast 12");
        assert_eq!(toasts.last().unwrap().message, "toast 19");
    }

    #[test]
    fn test_context_with_data() {
        let context = ReportContext::new("boundary", "render")
            .with_data(serde_json::json!({ "level": "component" }));
        assert_eq!(
            context.additional_data.unwrap()["level"],
            serde_json::json!("component")
        );
    }
}
