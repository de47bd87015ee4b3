//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `QR_SCAN` prefix and nested values use double underscores as separators.
//! List values (device types) are comma-separated.
//!
//! # Example
//!
//! ```no_run
//! use qr_scan_session::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Scanning with {:?}", config.scanner.device_types);
//! ```

mod error;
mod scanner;
mod simulator;
mod telemetry;

pub use error::{ConfigError, ValidationError};
pub use scanner::ScannerConfig;
pub use simulator::SimulatorConfig;
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Keys whose environment values are comma-separated lists
const LIST_KEYS: [&str; 2] = ["scanner.device_types", "simulator.devices"];

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Camera selection and presentation
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Simulated platform used by the CLI harness
    #[serde(default)]
    pub simulator: SimulatorConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `QR_SCAN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `QR_SCAN__SCANNER__POSITION=front` -> `scanner.position = front`
    /// - `QR_SCAN__SCANNER__DEVICE_TYPES=dual_camera,wide_angle_camera`
    /// - `QR_SCAN__TELEMETRY__JSON=true` -> `telemetry.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let environment = LIST_KEYS.iter().fold(
            config::Environment::with_prefix("QR_SCAN")
                .separator("__")
                .list_separator(",")
                .try_parsing(true),
            |env, key| env.with_list_parse_key(key),
        );

        let config = config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scanner.validate()?;
        self.telemetry.validate()?;
        self.simulator.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scan::{AuthorizationState, CameraPosition, DeviceType};
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const TOUCHED_VARS: [&str; 6] = [
        "QR_SCAN__SCANNER__DEVICE_TYPES",
        "QR_SCAN__SCANNER__POSITION",
        "QR_SCAN__SCANNER__ANIMATED_DISMISSAL",
        "QR_SCAN__TELEMETRY__LOG_LEVEL",
        "QR_SCAN__SIMULATOR__AUTHORIZATION",
        "QR_SCAN__SIMULATOR__DEVICES",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in TOUCHED_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(
            config.scanner.device_types,
            vec![DeviceType::DualCamera, DeviceType::WideAngleCamera]
        );
        assert_eq!(config.scanner.position, CameraPosition::Back);
        assert!(config.scanner.animated_dismissal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("QR_SCAN__SCANNER__DEVICE_TYPES", "wide_angle_camera,ultra_wide_camera");
        env::set_var("QR_SCAN__SCANNER__POSITION", "front");
        env::set_var("QR_SCAN__SCANNER__ANIMATED_DISMISSAL", "false");
        env::set_var("QR_SCAN__SIMULATOR__AUTHORIZATION", "denied");
        env::set_var("QR_SCAN__SIMULATOR__DEVICES", "dual_camera");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(
            config.scanner.device_types,
            vec![DeviceType::WideAngleCamera, DeviceType::UltraWideCamera]
        );
        assert_eq!(config.scanner.position, CameraPosition::Front);
        assert!(!config.scanner.animated_dismissal);
        assert_eq!(config.simulator.authorization, AuthorizationState::Denied);
        assert_eq!(config.simulator.devices, vec![DeviceType::DualCamera]);
    }

    #[test]
    fn test_unknown_enum_value_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("QR_SCAN__SCANNER__POSITION", "sideways");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_reports_bad_log_filter() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("QR_SCAN__TELEMETRY__LOG_LEVEL", "qr_scan_session=loud");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogFilter(_))
        ));
    }
}
