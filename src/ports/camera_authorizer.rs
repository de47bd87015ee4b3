//! CameraAuthorizer port - Platform camera permission.

use async_trait::async_trait;

use crate::domain::scan::AuthorizationState;

/// Port for reading and requesting camera permission.
///
/// `request_access` may show a system prompt and resolves once the user
/// answers. Implementations must update `authorization_status` to match.
#[async_trait]
pub trait CameraAuthorizer: Send + Sync {
    /// Current permission status, without prompting.
    fn authorization_status(&self) -> AuthorizationState;

    /// Prompt for access. Returns true if access was granted.
    async fn request_access(&self) -> bool;
}
