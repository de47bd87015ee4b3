//! Scanner configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::scan::{CameraPosition, CaptureSettings, DeviceType, VideoGravity};

/// How the scan session picks and presents its camera
#[derive(Debug, Clone, Deserialize)]
pub struct ScannerConfig {
    /// Device types in order of preference (comma-separated in env)
    #[serde(default = "default_device_types")]
    pub device_types: Vec<DeviceType>,

    /// Camera position to scan with
    #[serde(default)]
    pub position: CameraPosition,

    /// Preview scaling mode
    #[serde(default)]
    pub video_gravity: VideoGravity,

    /// Animate the dismissal of the scanner view
    #[serde(default = "default_animated_dismissal")]
    pub animated_dismissal: bool,
}

impl ScannerConfig {
    /// Settings handed to each new `ScanSession`
    pub fn capture_settings(&self) -> CaptureSettings {
        CaptureSettings {
            device_types: self.device_types.clone(),
            position: self.position,
            video_gravity: self.video_gravity,
            animated_dismissal: self.animated_dismissal,
        }
    }

    /// Validate scanner configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.device_types.is_empty() {
            return Err(ValidationError::NoDeviceTypes);
        }
        for (i, device_type) in self.device_types.iter().enumerate() {
            if self.device_types[..i].contains(device_type) {
                return Err(ValidationError::DuplicateDeviceType(device_type.to_string()));
            }
        }
        Ok(())
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            device_types: default_device_types(),
            position: CameraPosition::default(),
            video_gravity: VideoGravity::default(),
            animated_dismissal: default_animated_dismissal(),
        }
    }
}

fn default_device_types() -> Vec<DeviceType> {
    CaptureSettings::default().device_types
}

fn default_animated_dismissal() -> bool {
    true
}
