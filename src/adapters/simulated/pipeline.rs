//! Simulated capture pipeline.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::scan::{CaptureDevice, PreviewLayer, Symbology};
use crate::ports::{CapturePipeline, PipelineError};

/// Observable state of a `SimulatedPipeline`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineState {
    pub inputs: Vec<CaptureDevice>,
    pub metadata_types: Vec<Symbology>,
    pub preview: Option<PreviewLayer>,
    pub running: bool,
    pub start_calls: usize,
    pub stop_calls: usize,
}

/// In-memory pipeline.
///
/// Clones share state, so a test can keep a clone as a probe after the
/// original has been moved into a session.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
#[derive(Debug, Clone, Default)]
pub struct SimulatedPipeline {
    state: Arc<Mutex<PipelineState>>,
    input_rejection: Option<String>,
}

impl SimulatedPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every `add_input` fail with `reason`.
    pub fn rejecting_inputs(mut self, reason: impl Into<String>) -> Self {
        self.input_rejection = Some(reason.into());
        self
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> PipelineState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, PipelineState> {
        self.state
            .lock()
            .expect("SimulatedPipeline: state lock poisoned")
    }
}

impl CapturePipeline for SimulatedPipeline {
    fn add_input(&mut self, device: &CaptureDevice) -> Result<(), PipelineError> {
        if let Some(reason) = &self.input_rejection {
            return Err(PipelineError::new(reason.clone()));
        }
        self.lock().inputs.push(device.clone());
        Ok(())
    }

    fn add_metadata_output(&mut self, symbologies: &[Symbology]) {
        self.lock().metadata_types = symbologies.to_vec();
    }

    fn attach_preview(&mut self, layer: PreviewLayer) {
        self.lock().preview = Some(layer);
    }

    fn start_running(&mut self) {
        let mut state = self.lock();
        state.running = true;
        state.start_calls += 1;
    }

    fn stop_running(&mut self) {
        let mut state = self.lock();
        state.running = false;
        state.stop_calls += 1;
    }

    fn is_running(&self) -> bool {
        self.lock().running
    }
}
