//! Camera authorization state reported by the platform.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Permission status for camera access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationState {
    /// The user has not been asked yet.
    #[default]
    NotDetermined,
    Authorized,
    Denied,
    /// Access is blocked by policy (parental controls, MDM).
    Restricted,
}

impl AuthorizationState {
    /// Returns true if the camera may be used right away.
    pub fn is_granted(&self) -> bool {
        matches!(self, AuthorizationState::Authorized)
    }

    /// Returns true if the platform still has to prompt the user.
    pub fn needs_request(&self) -> bool {
        matches!(self, AuthorizationState::NotDetermined)
    }
}

impl fmt::Display for AuthorizationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AuthorizationState::NotDetermined => "not_determined",
            AuthorizationState::Authorized => "authorized",
            AuthorizationState::Denied => "denied",
            AuthorizationState::Restricted => "restricted",
        };
        write!(f, "{}", s)
    }
}
