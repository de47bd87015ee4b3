//! CapturePipeline port - The platform's capture session.
//!
//! The pipeline is an exclusively owned resource: a `ScanSession` takes it by
//! value at construction and is the only thing that mutates it.

use thiserror::Error;

use crate::domain::scan::{CaptureDevice, PreviewLayer, Symbology};

/// Failure reported by the platform while wiring the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PipelineError {
    pub message: String,
}

impl PipelineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Port for the camera capture pipeline.
pub trait CapturePipeline: Send {
    /// Open `device` and add it as the video input.
    fn add_input(&mut self, device: &CaptureDevice) -> Result<(), PipelineError>;

    /// Add a metadata output that only reports `symbologies`.
    fn add_metadata_output(&mut self, symbologies: &[Symbology]);

    /// Bind a preview surface over the host view.
    fn attach_preview(&mut self, layer: PreviewLayer);

    fn start_running(&mut self);

    fn stop_running(&mut self);

    fn is_running(&self) -> bool;
}
