//! Simulated camera permission.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::scan::AuthorizationState;
use crate::ports::CameraAuthorizer;

/// Permission source with a scripted prompt answer.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
#[derive(Debug)]
pub struct SimulatedAuthorizer {
    state: Mutex<AuthorizationState>,
    grant_on_request: bool,
    prompt_delay: Duration,
    requests: AtomicUsize,
}

impl SimulatedAuthorizer {
    /// Starts in `state`; a prompt grants access unless configured otherwise.
    pub fn new(state: AuthorizationState) -> Self {
        Self {
            state: Mutex::new(state),
            grant_on_request: true,
            prompt_delay: Duration::ZERO,
            requests: AtomicUsize::new(0),
        }
    }

    /// Sets the answer the user gives when prompted.
    pub fn with_grant(mut self, grant: bool) -> Self {
        self.grant_on_request = grant;
        self
    }

    /// Simulates the user taking time to answer.
    pub fn with_prompt_delay(mut self, delay: Duration) -> Self {
        self.prompt_delay = delay;
        self
    }

    /// Number of prompts shown.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CameraAuthorizer for SimulatedAuthorizer {
    fn authorization_status(&self) -> AuthorizationState {
        *self
            .state
            .lock()
            .expect("SimulatedAuthorizer: state lock poisoned")
    }

    async fn request_access(&self) -> bool {
        if !self.prompt_delay.is_zero() {
            tokio::time::sleep(self.prompt_delay).await;
        }
        self.requests.fetch_add(1, Ordering::SeqCst);

        let mut state = self
            .state
            .lock()
            .expect("SimulatedAuthorizer: state lock poisoned");
        if state.needs_request() {
            *state = if self.grant_on_request {
                AuthorizationState::Authorized
            } else {
                AuthorizationState::Denied
            };
        }
        state.is_granted()
    }
}
