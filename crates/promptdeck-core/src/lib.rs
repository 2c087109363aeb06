//! PromptDeck Core Services
//!
//! Backend-facing collaborators for the PromptDeck desktop UI:
//!
//! - **Config**: where the inference server lives (CLI flag, environment,
//!   or the localhost default).
//! - **Health**: last-known reachability snapshots plus the async probe.
//!   Probe failures are encoded inside the status value, never thrown.
//! - **Report**: the single funnel for caught UI errors: structured
//!   `tracing` events and an optional toast queue drained by the shell.
//!
//! The UI crate owns all rendering; nothing in here knows about Dioxus.

pub mod config;
pub mod error;
pub mod health;
pub mod report;

// Re-exports
pub use config::{BackendConfig, BACKEND_URL_ENV, DEFAULT_BACKEND_URL};
pub use error::{CoreError, CoreResult};
pub use health::{HealthMonitor, HealthStatus};
pub use report::{ErrorReporter, ReportContext, ReportOptions, Toast};
