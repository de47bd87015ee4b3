//! Ports - Interfaces for platform services.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the scan session and the host platform. Adapters implement these ports.
//!
//! ## Camera Ports
//!
//! - `CameraAuthorizer` - Permission status and the async access prompt
//! - `DeviceDiscovery` - Camera enumeration by type and position
//! - `CapturePipeline` - Input, metadata output, preview and run state
//!
//! ## Host Ports
//!
//! - `ScanDelegate` - Receives the decoded code
//! - `HostPresenter` - Host view bounds and dismissal

mod camera_authorizer;
mod capture_pipeline;
mod device_discovery;
mod host_presenter;
mod scan_delegate;

pub use camera_authorizer::CameraAuthorizer;
pub use capture_pipeline::{CapturePipeline, PipelineError};
pub use device_discovery::DeviceDiscovery;
pub use host_presenter::HostPresenter;
pub use scan_delegate::ScanDelegate;
