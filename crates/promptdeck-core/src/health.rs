//! Backend health monitoring.
//!
//! The monitor keeps the last-known reachability snapshot and performs the
//! actual probes. Probe failure is encoded inside the returned status;
//! callers never see an error from `check_backend_health`, and the UI can
//! await it without a failure branch.

use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::config::BackendConfig;
use crate::error::CoreResult;

/// How long a single probe may take before it counts as unreachable.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Snapshot of backend reachability.
///
/// Replaced wholesale on every probe; never merged with a prior snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Whether the backend answered the last probe
    pub available: bool,
    /// When the snapshot was taken
    pub last_checked: DateTime<Utc>,
    /// Failure description, if the probe failed
    pub error: Option<String>,
}

impl HealthStatus {
    /// Snapshot for a successful probe.
    pub fn up() -> Self {
        Self {
            available: true,
            last_checked: Utc::now(),
            error: None,
        }
    }

    /// Snapshot for a failed probe.
    pub fn down(error: impl Into<String>) -> Self {
        Self {
            available: false,
            last_checked: Utc::now(),
            error: Some(error.into()),
        }
    }

    /// Status used before any probe has run. Optimistic, so the UI does not
    /// warn during startup.
    pub fn unknown() -> Self {
        Self {
            available: true,
            last_checked: Utc::now(),
            error: None,
        }
    }
}

/// Health-check collaborator for the desktop UI.
///
/// # Example
///
/// ```ignore
/// let monitor = HealthMonitor::new(&BackendConfig::from_env());
///
/// // Cheap, synchronous read of the last-known state
/// let status = monitor.current_status();
///
/// // Actual probe; success or failure lands inside the status
/// let status = monitor.check_backend_health().await;
/// ```
pub struct HealthMonitor {
    client: reqwest::Client,
    config: BackendConfig,
    last: RwLock<HealthStatus>,
}

impl HealthMonitor {
    /// Create a monitor for the given backend.
    pub fn new(config: &BackendConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            config: config.clone(),
            last: RwLock::new(HealthStatus::unknown()),
        }
    }

    /// Base URL the monitor probes, for display in diagnostics.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Last-known status without performing a probe.
    pub fn current_status(&self) -> HealthStatus {
        self.last.read().clone()
    }

    /// Probe the backend and store the outcome.
    ///
    /// Always resolves with the new snapshot; a failed probe produces an
    /// unavailable status rather than an error.
    pub async fn check_backend_health(&self) -> HealthStatus {
        let status = match self.probe().await {
            Ok(()) => HealthStatus::up(),
            Err(e) => {
                tracing::debug!(url = %self.config.health_url(), "health probe failed: {e}");
                HealthStatus::down(e.to_string())
            }
        };

        *self.last.write() = status.clone();
        status
    }

    async fn probe(&self) -> CoreResult<()> {
        self.client
            .get(self.config.health_url())
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_up() {
        let status = HealthStatus::up();
        assert!(status.available);
        assert!(status.error.is_none());
    }

    #[test]
    fn test_status_down_carries_error() {
        let status = HealthStatus::down("connection refused");
        assert!(!status.available);
        assert_eq!(status.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_startup_status_is_optimistic() {
        let monitor = HealthMonitor::new(&BackendConfig::default());
        assert!(monitor.current_status().available);
    }
}
