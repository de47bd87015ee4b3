//! Simulated platform configuration for the CLI harness

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::scan::{AuthorizationState, CameraPosition, DeviceType, PreviewBounds};

const MAX_PROMPT_DELAY_MS: u64 = 60_000;

/// Behaviour of the simulated camera platform
#[derive(Debug, Clone, Deserialize)]
pub struct SimulatorConfig {
    /// Permission status before the session activates
    #[serde(default)]
    pub authorization: AuthorizationState,

    /// Answer given when the permission prompt is shown
    #[serde(default = "default_grant_access")]
    pub grant_access: bool,

    /// Time the simulated user takes to answer the prompt
    #[serde(default)]
    pub prompt_delay_ms: u64,

    /// Cameras present on the simulated device (comma-separated in env)
    #[serde(default = "default_devices")]
    pub devices: Vec<DeviceType>,

    /// Side the simulated cameras face
    #[serde(default)]
    pub device_position: CameraPosition,

    /// When set, opening any camera fails with this reason
    pub reject_input: Option<String>,

    /// Host view width in points
    #[serde(default = "default_host_width")]
    pub host_width: f64,

    /// Host view height in points
    #[serde(default = "default_host_height")]
    pub host_height: f64,
}

impl SimulatorConfig {
    pub fn prompt_delay(&self) -> Duration {
        Duration::from_millis(self.prompt_delay_ms)
    }

    /// Bounds of the simulated host view
    pub fn host_bounds(&self) -> PreviewBounds {
        PreviewBounds::sized(self.host_width, self.host_height)
    }

    /// Validate simulator configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.host_bounds().is_empty() {
            return Err(ValidationError::InvalidHostBounds);
        }
        if self.prompt_delay_ms > MAX_PROMPT_DELAY_MS {
            return Err(ValidationError::PromptDelayTooLong);
        }
        Ok(())
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            authorization: AuthorizationState::default(),
            grant_access: default_grant_access(),
            prompt_delay_ms: 0,
            devices: default_devices(),
            device_position: CameraPosition::default(),
            reject_input: None,
            host_width: default_host_width(),
            host_height: default_host_height(),
        }
    }
}

fn default_grant_access() -> bool {
    true
}

fn default_devices() -> Vec<DeviceType> {
    vec![DeviceType::WideAngleCamera]
}

fn default_host_width() -> f64 {
    390.0
}

fn default_host_height() -> f64 {
    844.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulator_defaults() {
        let config = SimulatorConfig::default();
        assert_eq!(config.authorization, AuthorizationState::NotDetermined);
        assert!(config.grant_access);
        assert_eq!(config.devices, vec![DeviceType::WideAngleCamera]);
        assert_eq!(config.prompt_delay(), Duration::ZERO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_bounds_rejected() {
        let config = SimulatorConfig {
            host_width: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidHostBounds));
    }

    #[test]
    fn test_nan_bounds_rejected() {
        let config = SimulatorConfig {
            host_height: f64::NAN,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidHostBounds));
    }

    #[test]
    fn test_long_prompt_delay_rejected() {
        let config = SimulatorConfig {
            prompt_delay_ms: 120_000,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::PromptDelayTooLong));
    }

    #[test]
    fn test_empty_device_list_is_allowed() {
        let config: SimulatorConfig = serde_json::from_str(r#"{"devices": []}"#).unwrap();
        assert!(config.devices.is_empty());
        assert!(config.validate().is_ok());
    }
}
