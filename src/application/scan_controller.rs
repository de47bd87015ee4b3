//! ScanController - Serial command queue that owns a `ScanSession`.
//!
//! Host lifecycle signals, the permission prompt result and metadata
//! callbacks all arrive as `ScanCommand`s on one queue and are applied to
//! the session strictly in order. The queue plays the role of the main
//! scheduling context:
//!
//! - the permission prompt runs on a spawned task and posts its answer back
//! - a scanned code posts `PerformDismissal`, so the host is dismissed after
//!   the metadata callback has returned
//!
//! After every command the session status is published on a watch channel,
//! so holders of a `ScanHandle` can wait for the session to settle.
//!
//! ## Shutdown
//!
//! The loop ends once the host has been dismissed, or when the shutdown
//! watch channel flips to `true`. Commands already queued when shutdown is
//! signalled are applied first. The session is torn down and handed back.

use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use super::scan_session::{Activation, ScanSession};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::scan::{MetadataObject, ScanStatus};

/// Messages accepted by the controller queue.
#[derive(Debug, Clone)]
pub enum ScanCommand {
    Activate,
    ViewWillAppear,
    ViewWillDisappear,
    AuthorizationResolved { granted: bool },
    Metadata(Vec<MetadataObject>),
    PerformDismissal,
}

/// Cloneable sender for the host and the platform callbacks.
#[derive(Debug, Clone)]
pub struct ScanHandle {
    session_id: SessionId,
    commands: mpsc::UnboundedSender<ScanCommand>,
    status: watch::Receiver<ScanStatus>,
}

impl ScanHandle {
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Status as of the last command the controller applied.
    pub fn status(&self) -> ScanStatus {
        *self.status.borrow()
    }

    /// Waits until the published status satisfies `ready`.
    ///
    /// Returns the last published status if the controller stops first.
    pub async fn wait_for_status(&self, ready: impl FnMut(&ScanStatus) -> bool) -> ScanStatus {
        let mut status = self.status.clone();
        let reached = status.wait_for(ready).await.map(|current| *current);
        reached.unwrap_or_else(|_| *status.borrow())
    }

    /// Waits until the session is past activation and the permission prompt.
    pub async fn settled(&self) -> ScanStatus {
        self.wait_for_status(|status| {
            !matches!(status, ScanStatus::Idle | ScanStatus::AwaitingAuthorization)
        })
        .await
    }

    pub fn activate(&self) -> Result<(), DomainError> {
        self.send(ScanCommand::Activate)
    }

    pub fn view_will_appear(&self) -> Result<(), DomainError> {
        self.send(ScanCommand::ViewWillAppear)
    }

    pub fn view_will_disappear(&self) -> Result<(), DomainError> {
        self.send(ScanCommand::ViewWillDisappear)
    }

    /// Delivers one metadata callback from the platform.
    pub fn deliver_metadata(&self, objects: Vec<MetadataObject>) -> Result<(), DomainError> {
        self.send(ScanCommand::Metadata(objects))
    }

    /// Enqueues a raw command.
    ///
    /// Fails with `SessionClosed` once the controller has stopped.
    pub fn send(&self, command: ScanCommand) -> Result<(), DomainError> {
        self.commands.send(command).map_err(|_| {
            DomainError::new(ErrorCode::SessionClosed, "Scan session is no longer running")
                .with_detail("session_id", self.session_id.to_string())
        })
    }
}

/// Owns a session and applies queued commands to it one at a time.
pub struct ScanController {
    session: ScanSession,
    commands: mpsc::UnboundedReceiver<ScanCommand>,
    scheduler: mpsc::UnboundedSender<ScanCommand>,
    status: watch::Sender<ScanStatus>,
}

impl ScanController {
    /// Wraps `session` and returns the handle that feeds it.
    pub fn new(session: ScanSession) -> (Self, ScanHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (status_tx, status_rx) = watch::channel(session.status());
        let handle = ScanHandle {
            session_id: session.id(),
            commands: tx.clone(),
            status: status_rx,
        };
        let controller = Self {
            session,
            commands: rx,
            scheduler: tx,
            status: status_tx,
        };
        (controller, handle)
    }

    /// Run the command loop until the host is dismissed or shutdown is signalled.
    ///
    /// Returns the torn-down session.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> ScanSession {
        loop {
            tokio::select! {
                // Queued commands win over shutdown.
                biased;

                command = self.commands.recv() => {
                    match command {
                        Some(command) => self.handle(command),
                        None => break,
                    }
                    if self.session.is_dismissed() {
                        break;
                    }
                }

                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        debug!(session_id = %self.session.id(), "Scan controller shutting down");
                        break;
                    }
                }
            }
        }

        self.session.teardown();
        self.status.send_replace(self.session.status());
        self.session
    }

    /// Apply a single command (also useful for testing without the loop).
    pub fn handle(&mut self, command: ScanCommand) {
        debug!(session_id = %self.session.id(), command = ?command, "Handling scan command");

        // Terminal failures are logged and dismissed inside the session.
        match command {
            ScanCommand::Activate => match self.session.activate() {
                Ok(Activation::AwaitingAuthorization) => self.request_authorization(),
                Ok(_) => {}
                Err(e) => {
                    debug!(session_id = %self.session.id(), error = %e, "Activation failed");
                }
            },
            ScanCommand::AuthorizationResolved { granted } => {
                match self.session.resolve_authorization(granted) {
                    Ok(activation) => {
                        debug!(session_id = %self.session.id(), ?activation, "Authorization applied");
                    }
                    Err(e) => {
                        debug!(session_id = %self.session.id(), error = %e, "Capture not started after authorization");
                    }
                }
            }
            ScanCommand::ViewWillAppear => {
                self.session.on_visible();
            }
            ScanCommand::ViewWillDisappear => {
                self.session.on_hidden();
            }
            ScanCommand::Metadata(objects) => {
                if self.session.on_metadata(&objects).is_some() {
                    self.schedule(ScanCommand::PerformDismissal);
                }
            }
            ScanCommand::PerformDismissal => {
                self.session.perform_scheduled_dismissal();
            }
        }

        self.status.send_replace(self.session.status());
    }

    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    fn schedule(&self, command: ScanCommand) {
        if self.scheduler.send(command).is_err() {
            warn!(session_id = %self.session.id(), "Scan queue closed, command dropped");
        }
    }

    fn request_authorization(&self) {
        let authorizer = self.session.authorizer();
        let scheduler = self.scheduler.clone();
        let session_id = self.session.id();

        tokio::spawn(async move {
            let granted = authorizer.request_access().await;
            debug!(session_id = %session_id, granted, "Camera access prompt answered");
            if scheduler
                .send(ScanCommand::AuthorizationResolved { granted })
                .is_err()
            {
                debug!(session_id = %session_id, "Scan controller gone before authorization resolved");
            }
        });
    }
}
