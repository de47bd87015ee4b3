//! Capture device and preview value types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of built-in camera, in the platform's discovery vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    DualCamera,
    WideAngleCamera,
    UltraWideCamera,
    TelephotoCamera,
    TripleCamera,
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeviceType::DualCamera => "dual_camera",
            DeviceType::WideAngleCamera => "wide_angle_camera",
            DeviceType::UltraWideCamera => "ultra_wide_camera",
            DeviceType::TelephotoCamera => "telephoto_camera",
            DeviceType::TripleCamera => "triple_camera",
        };
        write!(f, "{}", s)
    }
}

/// Which side of the device a camera faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CameraPosition {
    #[default]
    Back,
    Front,
}

/// A camera the platform discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureDevice {
    pub unique_id: String,
    pub device_type: DeviceType,
    pub position: CameraPosition,
}

impl CaptureDevice {
    pub fn new(unique_id: impl Into<String>, device_type: DeviceType, position: CameraPosition) -> Self {
        Self {
            unique_id: unique_id.into(),
            device_type,
            position,
        }
    }
}

/// How the preview scales video into its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VideoGravity {
    /// Fill the bounds, cropping the video if needed.
    #[default]
    ResizeAspectFill,
    /// Fit inside the bounds, letterboxing if needed.
    ResizeAspect,
    /// Stretch to the bounds.
    Resize,
}

/// Rectangle of the host view, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PreviewBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PreviewBounds {
    /// Bounds anchored at the origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Returns true if the rectangle covers no area (NaN sizes included).
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Preview surface bound to the pipeline and laid over the host view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewLayer {
    pub gravity: VideoGravity,
    pub frame: PreviewBounds,
}

/// How a session picks and presents its camera.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureSettings {
    /// Device types in order of preference.
    pub device_types: Vec<DeviceType>,
    pub position: CameraPosition,
    pub video_gravity: VideoGravity,
    pub animated_dismissal: bool,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            device_types: vec![DeviceType::DualCamera, DeviceType::WideAngleCamera],
            position: CameraPosition::Back,
            video_gravity: VideoGravity::ResizeAspectFill,
            animated_dismissal: true,
        }
    }
}
