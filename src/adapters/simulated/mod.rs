//! Simulated camera platform.
//!
//! In-memory implementations of every port. Tests use them directly; the
//! CLI harness assembles them from `SimulatorConfig` via `SimulatedPlatform`.
//!
//! # Security Note
//!
//! These adapters use `.expect()` on lock operations and are not meant to
//! back a real camera.

mod authorizer;
mod devices;
mod host;
mod metadata_line;
mod pipeline;

pub use authorizer::SimulatedAuthorizer;
pub use devices::SimulatedDeviceCatalog;
pub use host::{RecordingDelegate, RecordingPresenter};
pub use metadata_line::parse_metadata_line;
pub use pipeline::{PipelineState, SimulatedPipeline};

use std::sync::Arc;

use crate::application::ScanPorts;
use crate::config::SimulatorConfig;

/// A full set of simulated platform services.
#[derive(Debug, Clone)]
pub struct SimulatedPlatform {
    pub authorizer: Arc<SimulatedAuthorizer>,
    pub catalog: Arc<SimulatedDeviceCatalog>,
    /// Probe clone; the session gets its own clone via `pipeline()`.
    pub pipeline: SimulatedPipeline,
    pub presenter: Arc<RecordingPresenter>,
}

impl SimulatedPlatform {
    pub fn from_config(config: &SimulatorConfig) -> Self {
        let authorizer = SimulatedAuthorizer::new(config.authorization)
            .with_grant(config.grant_access)
            .with_prompt_delay(config.prompt_delay());

        let catalog = config
            .devices
            .iter()
            .enumerate()
            .fold(SimulatedDeviceCatalog::new(), |catalog, (index, device_type)| {
                catalog.with_device(
                    format!("sim-{}-{}", index, device_type),
                    *device_type,
                    config.device_position,
                )
            });

        let pipeline = match &config.reject_input {
            Some(reason) => SimulatedPipeline::new().rejecting_inputs(reason.clone()),
            None => SimulatedPipeline::new(),
        };

        let presenter = RecordingPresenter::new(config.host_bounds());

        Self {
            authorizer: Arc::new(authorizer),
            catalog: Arc::new(catalog),
            pipeline,
            presenter: Arc::new(presenter),
        }
    }

    /// Ports for a `ScanSession`.
    pub fn ports(&self) -> ScanPorts {
        ScanPorts {
            authorizer: self.authorizer.clone(),
            discovery: self.catalog.clone(),
            presenter: self.presenter.clone(),
        }
    }

    /// A pipeline handle sharing state with `self.pipeline`.
    pub fn pipeline(&self) -> Box<SimulatedPipeline> {
        Box::new(self.pipeline.clone())
    }
}
