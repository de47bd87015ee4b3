//! Adapters - Implementations of port interfaces.
//!
//! - `simulated` - In-memory camera platform for tests and the CLI harness

pub mod simulated;

pub use simulated::{
    parse_metadata_line, RecordingDelegate, RecordingPresenter, SimulatedAuthorizer,
    SimulatedDeviceCatalog, SimulatedPipeline, SimulatedPlatform,
};
