//! Shared context for PromptDeck components.
//!
//! The root component provides the backend collaborators and the theme
//! signal; everything below reaches them through these hooks.
//!
//! ## Usage
//!
//! ```ignore
//! let monitor = use_health_monitor();
//! let status = monitor.current_status();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use promptdeck_core::{ErrorReporter, HealthMonitor};

use crate::theme::ThemeMode;

/// Shared health-check collaborator.
pub type SharedMonitor = Arc<HealthMonitor>;

/// Shared error-handling collaborator.
pub type SharedReporter = Arc<ErrorReporter>;

/// Hook to access the health monitor from context.
pub fn use_health_monitor() -> SharedMonitor {
    use_context::<SharedMonitor>()
}

/// Hook to access the error reporter from context.
pub fn use_error_reporter() -> SharedReporter {
    use_context::<SharedReporter>()
}

/// Hook to access the reactive theme mode.
///
/// Writing to the signal re-themes the whole app.
pub fn use_theme_mode() -> Signal<ThemeMode> {
    use_context::<Signal<ThemeMode>>()
}
