//! Telemetry configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

impl TelemetryConfig {
    /// Build the subscriber filter from `log_level`
    pub fn env_filter(&self) -> Result<EnvFilter, ValidationError> {
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::EmptyLogFilter);
        }
        EnvFilter::try_new(&self.log_level)
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))
    }

    /// Validate telemetry configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.env_filter().map(|_| ())
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info,qr_scan_session=debug".to_string()
}
