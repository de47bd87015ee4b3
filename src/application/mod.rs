//! Application layer - Drives the scan session against the ports.
//!
//! - `scan_session` - The session lifecycle and single-shot decode handoff
//! - `scan_controller` - Serial command queue that owns a session

pub mod scan_controller;
pub mod scan_session;

pub use scan_controller::{ScanCommand, ScanController, ScanHandle};
pub use scan_session::{Activation, ScanPorts, ScanSession};
