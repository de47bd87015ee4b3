//! Scan domain module.
//!
//! Value types for one camera scan: authorization state, capture device
//! selection, metadata detections and the session lifecycle.
//!
//! # Events
//!
//! - `Activated` - The host view activated the session
//! - `AuthorizationRequested` / `AuthorizationResolved` - Platform prompt round trip
//! - `CaptureStarted` - Device attached, QR output bound, pipeline running
//! - `PipelineResumed` / `PipelineStopped` - Visibility toggles
//! - `CodeScanned` - The one decoded value was forwarded
//! - `Failed` - Terminal configuration or permission failure
//! - `Dismissed` - The host view was asked to go away

mod authorization;
mod capture;
mod errors;
mod events;
mod metadata;
mod status;

pub use authorization::AuthorizationState;
pub use capture::{
    CameraPosition, CaptureDevice, CaptureSettings, DeviceType, PreviewBounds, PreviewLayer,
    VideoGravity,
};
pub use errors::ScanError;
pub use events::ScanEvent;
pub use metadata::{DecodedCode, MachineReadableCode, MetadataObject, Symbology};
pub use status::ScanStatus;
