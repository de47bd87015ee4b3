//! Scan-specific error types.

use thiserror::Error;

use super::AuthorizationState;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Terminal failures of a scan session.
///
/// Every variant ends the session and dismisses the host view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Camera access is {0}")]
    PermissionDenied(AuthorizationState),

    #[error("No matching camera device is available")]
    DeviceUnavailable,

    #[error("Could not attach camera input: {0}")]
    InputAttachError(String),
}

impl ScanError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ScanError::PermissionDenied(_) => ErrorCode::PermissionDenied,
            ScanError::DeviceUnavailable => ErrorCode::DeviceUnavailable,
            ScanError::InputAttachError(_) => ErrorCode::InputAttachError,
        }
    }
}

impl From<ScanError> for DomainError {
    fn from(err: ScanError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
