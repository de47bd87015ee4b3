//! Simulated camera catalog.

use crate::domain::scan::{CameraPosition, CaptureDevice, DeviceType};
use crate::ports::DeviceDiscovery;

/// Fixed list of cameras.
#[derive(Debug, Clone, Default)]
pub struct SimulatedDeviceCatalog {
    devices: Vec<CaptureDevice>,
}

impl SimulatedDeviceCatalog {
    /// An empty catalog: discovery finds nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device(
        mut self,
        unique_id: impl Into<String>,
        device_type: DeviceType,
        position: CameraPosition,
    ) -> Self {
        self.devices
            .push(CaptureDevice::new(unique_id, device_type, position));
        self
    }
}

impl DeviceDiscovery for SimulatedDeviceCatalog {
    fn devices(&self, device_types: &[DeviceType], position: CameraPosition) -> Vec<CaptureDevice> {
        device_types
            .iter()
            .flat_map(|wanted| {
                self.devices
                    .iter()
                    .filter(move |d| d.device_type == *wanted && d.position == position)
            })
            .cloned()
            .collect()
    }
}
