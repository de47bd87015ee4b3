//! ScanSession - Camera scan lifecycle with a single-shot decode handoff.
//!
//! A session is created when the scanner view activates. It checks camera
//! permission, wires the capture pipeline to a QR-only metadata output and
//! forwards the first decoded QR string to its delegate. After that one
//! handoff the pipeline stops and the host view is dismissed.
//!
//! Every method takes `&mut self`; callers serialize access through a
//! single queue (see `ScanController`).

use std::sync::{Arc, Weak};

use tracing::{debug, error, info, warn};

use crate::domain::foundation::{SessionId, StateMachine, Timestamp};
use crate::domain::scan::{
    AuthorizationState, CaptureSettings, DecodedCode, MetadataObject, PreviewLayer, ScanError,
    ScanEvent, ScanStatus, Symbology,
};
use crate::ports::{CameraAuthorizer, CapturePipeline, DeviceDiscovery, HostPresenter, ScanDelegate};

/// Shared platform services a session talks to.
#[derive(Clone)]
pub struct ScanPorts {
    pub authorizer: Arc<dyn CameraAuthorizer>,
    pub discovery: Arc<dyn DeviceDiscovery>,
    pub presenter: Arc<dyn HostPresenter>,
}

/// What an activation step led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Capture is configured and the pipeline is running.
    Started,
    /// The platform must prompt; call `resolve_authorization` with the answer.
    AwaitingAuthorization,
    /// The user refused when prompted. Nothing runs and the host stays up.
    Inactive,
    /// The session was not in a state that accepts this step.
    Ignored,
}

/// One activation of the scanner view.
pub struct ScanSession {
    id: SessionId,
    settings: CaptureSettings,
    status: ScanStatus,
    ports: ScanPorts,
    pipeline: Box<dyn CapturePipeline>,
    delegate: Option<Weak<dyn ScanDelegate>>,
    preview: Option<PreviewLayer>,
    dismissal_pending: bool,
    dismissed: bool,
    domain_events: Vec<ScanEvent>,
}

impl ScanSession {
    /// Creates a session that takes ownership of `pipeline`.
    pub fn new(settings: CaptureSettings, ports: ScanPorts, pipeline: Box<dyn CapturePipeline>) -> Self {
        Self {
            id: SessionId::new(),
            settings,
            status: ScanStatus::Idle,
            ports,
            pipeline,
            delegate: None,
            preview: None,
            dismissal_pending: false,
            dismissed: false,
            domain_events: Vec::new(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn status(&self) -> ScanStatus {
        self.status
    }

    pub fn settings(&self) -> &CaptureSettings {
        &self.settings
    }

    /// Current camera permission, as the platform reports it now.
    pub fn authorization_state(&self) -> AuthorizationState {
        self.ports.authorizer.authorization_status()
    }

    /// Handle used to run the asynchronous permission prompt.
    pub fn authorizer(&self) -> Arc<dyn CameraAuthorizer> {
        Arc::clone(&self.ports.authorizer)
    }

    pub fn is_running(&self) -> bool {
        self.pipeline.is_running()
    }

    /// Preview bound during configuration, if any.
    pub fn preview(&self) -> Option<PreviewLayer> {
        self.preview
    }

    /// True between a forwarded code and the scheduled dismissal.
    pub fn dismissal_scheduled(&self) -> bool {
        self.dismissal_pending
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Events recorded so far.
    pub fn events(&self) -> &[ScanEvent] {
        &self.domain_events
    }

    /// Takes accumulated events, clearing the internal buffer.
    pub fn take_events(&mut self) -> Vec<ScanEvent> {
        std::mem::take(&mut self.domain_events)
    }

    /// Registers the listener for the decoded code.
    ///
    /// The session keeps only a weak reference.
    pub fn set_delegate<D: ScanDelegate + 'static>(&mut self, delegate: &Arc<D>) {
        let weak: Weak<D> = Arc::downgrade(delegate);
        self.delegate = Some(weak);
    }

    // ───────────────────────────────────────────────────────────────
    // Lifecycle
    // ───────────────────────────────────────────────────────────────

    /// Starts the session according to the current camera permission.
    ///
    /// - `Authorized`: configures capture right away.
    /// - `NotDetermined`: returns `AwaitingAuthorization`; the caller runs the
    ///   prompt and reports back through `resolve_authorization`.
    /// - `Denied` / `Restricted`: fails with `PermissionDenied` and dismisses.
    pub fn activate(&mut self) -> Result<Activation, ScanError> {
        if self.status != ScanStatus::Idle {
            debug!(session_id = %self.id, status = %self.status, "Activate ignored");
            return Ok(Activation::Ignored);
        }

        self.record(ScanEvent::Activated {
            session_id: self.id,
            at: Timestamp::now(),
        });

        let state = self.ports.authorizer.authorization_status();
        match state {
            AuthorizationState::Authorized => {
                self.configure_capture()?;
                Ok(Activation::Started)
            }
            AuthorizationState::NotDetermined => {
                self.transition(ScanStatus::AwaitingAuthorization);
                info!(session_id = %self.id, "Requesting camera access");
                self.record(ScanEvent::AuthorizationRequested {
                    session_id: self.id,
                    at: Timestamp::now(),
                });
                Ok(Activation::AwaitingAuthorization)
            }
            AuthorizationState::Denied | AuthorizationState::Restricted => {
                Err(self.fail(ScanError::PermissionDenied(state)))
            }
        }
    }

    /// Applies the user's answer to the permission prompt.
    ///
    /// A refusal leaves the session inactive without dismissing the host.
    pub fn resolve_authorization(&mut self, granted: bool) -> Result<Activation, ScanError> {
        if self.status != ScanStatus::AwaitingAuthorization {
            debug!(session_id = %self.id, status = %self.status, "Authorization result ignored");
            return Ok(Activation::Ignored);
        }

        self.record(ScanEvent::AuthorizationResolved {
            session_id: self.id,
            granted,
            at: Timestamp::now(),
        });

        if granted {
            self.configure_capture()?;
            Ok(Activation::Started)
        } else {
            info!(session_id = %self.id, "Camera access refused, session stays inactive");
            self.transition(ScanStatus::Inactive);
            Ok(Activation::Inactive)
        }
    }

    /// Selects a camera, binds the QR metadata output and the preview, and
    /// starts the pipeline.
    ///
    /// Fails with `DeviceUnavailable` when no configured device type exists
    /// at the configured position, or `InputAttachError` when the device
    /// cannot be opened. Both dismiss the host.
    pub fn configure_capture(&mut self) -> Result<(), ScanError> {
        if !matches!(self.status, ScanStatus::Idle | ScanStatus::AwaitingAuthorization) {
            debug!(session_id = %self.id, status = %self.status, "Capture already configured");
            return Ok(());
        }

        let device = match self
            .ports
            .discovery
            .devices(&self.settings.device_types, self.settings.position)
            .into_iter()
            .next()
        {
            Some(device) => device,
            None => return Err(self.fail(ScanError::DeviceUnavailable)),
        };

        if let Err(e) = self.pipeline.add_input(&device) {
            return Err(self.fail(ScanError::InputAttachError(e.message)));
        }

        self.pipeline.add_metadata_output(&[Symbology::Qr]);

        let layer = PreviewLayer {
            gravity: self.settings.video_gravity,
            frame: self.ports.presenter.host_bounds(),
        };
        self.pipeline.attach_preview(layer);
        self.preview = Some(layer);

        self.transition(ScanStatus::Scanning);
        self.pipeline.start_running();

        info!(
            session_id = %self.id,
            device_id = %device.unique_id,
            device_type = %device.device_type,
            "Capture started"
        );
        self.record(ScanEvent::CaptureStarted {
            session_id: self.id,
            device_id: device.unique_id,
            device_type: device.device_type,
            at: Timestamp::now(),
        });

        Ok(())
    }

    /// Host view is about to appear. Returns true if the pipeline started.
    pub fn on_visible(&mut self) -> bool {
        if !self.status.is_scanning() || self.pipeline.is_running() {
            return false;
        }

        self.pipeline.start_running();
        debug!(session_id = %self.id, "Pipeline resumed");
        self.record(ScanEvent::PipelineResumed {
            session_id: self.id,
            at: Timestamp::now(),
        });
        true
    }

    /// Host view is about to disappear. Returns true if the pipeline stopped.
    pub fn on_hidden(&mut self) -> bool {
        if !self.pipeline.is_running() {
            return false;
        }

        self.pipeline.stop_running();
        debug!(session_id = %self.id, "Pipeline stopped");
        self.record(ScanEvent::PipelineStopped {
            session_id: self.id,
            at: Timestamp::now(),
        });
        true
    }

    /// Handles one metadata callback.
    ///
    /// Only the first object is inspected. When it is a QR code carrying a
    /// string, the code goes to the delegate, the pipeline stops and a
    /// dismissal is scheduled. Returns the forwarded code.
    pub fn on_metadata(&mut self, objects: &[MetadataObject]) -> Option<DecodedCode> {
        let first = objects.first()?;

        if !self.status.is_scanning() {
            debug!(session_id = %self.id, status = %self.status, "Metadata ignored");
            return None;
        }

        let code = match first.decoded_qr() {
            Some(code) => code,
            None => {
                debug!(session_id = %self.id, object = ?first, "First detection is not a decoded QR code");
                return None;
            }
        };

        match self.delegate.as_ref().and_then(Weak::upgrade) {
            Some(delegate) => delegate.did_scan(&code),
            None => warn!(session_id = %self.id, "No delegate attached, decoded code dropped"),
        }

        self.pipeline.stop_running();
        self.transition(ScanStatus::Completed);
        self.dismissal_pending = true;

        info!(session_id = %self.id, code = %code, "QR code scanned");
        self.record(ScanEvent::CodeScanned {
            session_id: self.id,
            code: code.clone(),
            at: Timestamp::now(),
        });

        Some(code)
    }

    /// Runs the dismissal scheduled by a scanned code.
    ///
    /// Returns true if the host was asked to dismiss.
    pub fn perform_scheduled_dismissal(&mut self) -> bool {
        if !self.dismissal_pending {
            return false;
        }
        self.dismissal_pending = false;
        self.dismiss_host()
    }

    /// Stops the pipeline if it is still running.
    pub fn teardown(&mut self) {
        self.on_hidden();
        debug!(session_id = %self.id, status = %self.status, "Scan session torn down");
    }

    // ───────────────────────────────────────────────────────────────
    // Internals
    // ───────────────────────────────────────────────────────────────

    fn fail(&mut self, err: ScanError) -> ScanError {
        error!(session_id = %self.id, code = %err.code(), error = %err, "Scan session failed");
        self.transition(ScanStatus::Failed);
        self.record(ScanEvent::Failed {
            session_id: self.id,
            reason: err.to_string(),
            at: Timestamp::now(),
        });
        self.dismiss_host();
        err
    }

    fn dismiss_host(&mut self) -> bool {
        if self.dismissed {
            return false;
        }
        let animated = self.settings.animated_dismissal;
        self.ports.presenter.dismiss(animated);
        self.dismissed = true;
        self.record(ScanEvent::Dismissed {
            session_id: self.id,
            animated,
            at: Timestamp::now(),
        });
        true
    }

    fn transition(&mut self, target: ScanStatus) {
        match self.status.transition_to(target) {
            Ok(next) => self.status = next,
            Err(e) => warn!(session_id = %self.id, error = %e, "Rejected status transition"),
        }
    }

    fn record(&mut self, event: ScanEvent) {
        self.domain_events.push(event);
    }
}
