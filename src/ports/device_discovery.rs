//! DeviceDiscovery port - Enumerates cameras.

use crate::domain::scan::{CameraPosition, CaptureDevice, DeviceType};

/// Port for discovering capture devices.
pub trait DeviceDiscovery: Send + Sync {
    /// Devices matching any of `device_types` at `position`.
    ///
    /// Results are ordered by the order of `device_types`, so the first
    /// entry is the most preferred available camera.
    fn devices(&self, device_types: &[DeviceType], position: CameraPosition) -> Vec<CaptureDevice>;
}
