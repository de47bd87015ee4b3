//! Integration tests for the scan session lifecycle.
//!
//! These tests drive a `ScanController` through its handle the way a host
//! view and the platform callbacks would:
//! 1. Host activates the session and makes the view visible
//! 2. Platform answers the permission prompt (when needed)
//! 3. Platform delivers metadata callbacks
//! 4. Controller forwards one code and dismisses the host
//!
//! Uses the simulated platform adapters, no camera required.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use qr_scan_session::adapters::simulated::PipelineState;
use qr_scan_session::adapters::{RecordingDelegate, SimulatedPlatform};
use qr_scan_session::application::{ScanController, ScanHandle, ScanSession};
use qr_scan_session::config::{ScannerConfig, SimulatorConfig};
use qr_scan_session::domain::foundation::ErrorCode;
use qr_scan_session::domain::scan::{
    AuthorizationState, DecodedCode, DeviceType, MetadataObject, ScanEvent, ScanStatus, Symbology,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    platform: SimulatedPlatform,
    delegate: Arc<RecordingDelegate>,
    handle: ScanHandle,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<ScanSession>,
}

impl Harness {
    fn start(simulator: SimulatorConfig) -> Self {
        Self::start_with(ScannerConfig::default(), simulator)
    }

    fn start_with(scanner: ScannerConfig, simulator: SimulatorConfig) -> Self {
        let platform = SimulatedPlatform::from_config(&simulator);
        let delegate = Arc::new(RecordingDelegate::new());

        let mut session = ScanSession::new(
            scanner.capture_settings(),
            platform.ports(),
            platform.pipeline(),
        );
        session.set_delegate(&delegate);

        let (controller, handle) = ScanController::new(session);
        let (shutdown, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(controller.run(shutdown_rx));

        Self {
            platform,
            delegate,
            handle,
            shutdown,
            task,
        }
    }

    fn pipeline(&self) -> PipelineState {
        self.platform.pipeline.snapshot()
    }

    /// Waits until activation and any permission prompt are done.
    async fn settled(&self) -> ScanStatus {
        tokio::time::timeout(Duration::from_secs(2), self.handle.settled())
            .await
            .expect("session did not settle")
    }

    async fn finish(self) -> ScanSession {
        tokio::time::timeout(Duration::from_secs(2), self.task)
            .await
            .expect("controller did not stop")
            .expect("controller panicked")
    }

    async fn shut_down(self) -> ScanSession {
        self.shutdown.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(2), self.task)
            .await
            .expect("controller did not stop")
            .expect("controller panicked")
    }
}

fn authorized() -> SimulatorConfig {
    SimulatorConfig {
        authorization: AuthorizationState::Authorized,
        ..SimulatorConfig::default()
    }
}

// =============================================================================
// Happy Path
// =============================================================================

#[tokio::test]
async fn scanning_a_qr_code_forwards_once_and_dismisses() {
    let harness = Harness::start(authorized());

    harness.handle.activate().unwrap();
    harness.handle.view_will_appear().unwrap();
    harness
        .handle
        .deliver_metadata(vec![MetadataObject::qr("ABC123")])
        .unwrap();
    harness
        .handle
        .deliver_metadata(vec![MetadataObject::qr("ignored")])
        .ok();

    let delegate = harness.delegate.clone();
    let presenter = harness.platform.presenter.clone();
    let probe = harness.platform.pipeline.clone();
    let session = harness.finish().await;

    assert_eq!(session.status(), ScanStatus::Completed);
    assert_eq!(delegate.codes(), vec![DecodedCode::new("ABC123")]);
    assert_eq!(presenter.dismissals(), vec![true]);
    assert!(!probe.snapshot().running);
    assert_eq!(probe.snapshot().metadata_types, vec![Symbology::Qr]);
}

#[tokio::test]
async fn not_determined_prompts_then_configures_on_the_queue() {
    let harness = Harness::start(SimulatorConfig {
        authorization: AuthorizationState::NotDetermined,
        grant_access: true,
        prompt_delay_ms: 20,
        ..SimulatorConfig::default()
    });

    harness.handle.activate().unwrap();
    assert_eq!(harness.settled().await, ScanStatus::Scanning);

    assert_eq!(harness.platform.authorizer.request_count(), 1);
    assert!(harness.pipeline().running);
    assert_eq!(harness.pipeline().inputs.len(), 1);

    harness
        .handle
        .deliver_metadata(vec![MetadataObject::qr("after-prompt")])
        .unwrap();
    let delegate = harness.delegate.clone();
    let session = harness.finish().await;

    assert_eq!(session.status(), ScanStatus::Completed);
    assert_eq!(delegate.codes(), vec![DecodedCode::new("after-prompt")]);

    let kinds: Vec<_> = session.events().iter().map(|e| e.kind()).collect();
    assert_eq!(
        &kinds[..4],
        &["activated", "authorization_requested", "authorization_resolved", "capture_started"]
    );
}

#[tokio::test]
async fn metadata_is_forwarded_once_the_session_settles() {
    let harness = Harness::start(SimulatorConfig::default());

    harness.handle.activate().unwrap();
    harness.handle.view_will_appear().unwrap();
    assert_eq!(harness.settled().await, ScanStatus::Scanning);

    harness
        .handle
        .deliver_metadata(vec![MetadataObject::qr("piped")])
        .unwrap();

    let delegate = harness.delegate.clone();
    let session = harness.finish().await;
    assert_eq!(session.status(), ScanStatus::Completed);
    assert_eq!(delegate.codes(), vec![DecodedCode::new("piped")]);
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn refused_prompt_keeps_host_up_and_pipeline_idle() {
    let harness = Harness::start(SimulatorConfig {
        authorization: AuthorizationState::NotDetermined,
        grant_access: false,
        ..SimulatorConfig::default()
    });

    harness.handle.activate().unwrap();
    harness.handle.view_will_appear().unwrap();
    assert_eq!(harness.settled().await, ScanStatus::Inactive);

    assert_eq!(harness.platform.presenter.dismiss_count(), 0);
    assert_eq!(harness.pipeline().start_calls, 0);

    let session = harness.shut_down().await;
    assert_eq!(session.status(), ScanStatus::Inactive);
}

#[tokio::test]
async fn denied_permission_dismisses_without_starting() {
    let harness = Harness::start(SimulatorConfig {
        authorization: AuthorizationState::Denied,
        ..SimulatorConfig::default()
    });

    harness.handle.activate().unwrap();
    harness.handle.view_will_appear().ok();

    let presenter = harness.platform.presenter.clone();
    let probe = harness.platform.pipeline.clone();
    let authorizer = harness.platform.authorizer.clone();
    let session = harness.finish().await;

    assert_eq!(session.status(), ScanStatus::Failed);
    assert_eq!(presenter.dismiss_count(), 1);
    assert_eq!(probe.snapshot().start_calls, 0);
    assert_eq!(authorizer.request_count(), 0);
    assert!(session
        .events()
        .iter()
        .any(|e| matches!(e, ScanEvent::Failed { reason, .. } if reason.contains("denied"))));
}

#[tokio::test]
async fn missing_back_camera_is_device_unavailable() {
    let harness = Harness::start(SimulatorConfig {
        devices: vec![DeviceType::TelephotoCamera],
        ..authorized()
    });

    harness.handle.activate().unwrap();
    let presenter = harness.platform.presenter.clone();
    let session = harness.finish().await;

    assert_eq!(session.status(), ScanStatus::Failed);
    assert_eq!(presenter.dismiss_count(), 1);
}

#[tokio::test]
async fn unopenable_camera_is_input_attach_error() {
    let harness = Harness::start(SimulatorConfig {
        reject_input: Some("camera busy".into()),
        ..authorized()
    });

    harness.handle.activate().unwrap();
    let presenter = harness.platform.presenter.clone();
    let session = harness.finish().await;

    assert_eq!(session.status(), ScanStatus::Failed);
    assert_eq!(presenter.dismiss_count(), 1);
    assert!(session
        .events()
        .iter()
        .any(|e| matches!(e, ScanEvent::Failed { reason, .. } if reason.contains("camera busy"))));
}

// =============================================================================
// Visibility and Configuration
// =============================================================================

#[tokio::test]
async fn hide_and_show_pause_and_resume_the_pipeline() {
    let harness = Harness::start(authorized());

    harness.handle.activate().unwrap();
    harness.handle.view_will_appear().unwrap();
    harness.handle.view_will_disappear().unwrap();
    harness.handle.view_will_disappear().unwrap();
    harness.handle.view_will_appear().unwrap();
    harness.handle.view_will_appear().unwrap();

    let probe = harness.platform.pipeline.clone();
    let session = harness.shut_down().await;

    // One start from configuration, one resume; teardown adds the last stop.
    let state = probe.snapshot();
    assert_eq!(state.start_calls, 2);
    assert_eq!(state.stop_calls, 2);
    assert!(!state.running);
    assert_eq!(session.status(), ScanStatus::Scanning);

    let kinds: Vec<_> = session.events().iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            "activated",
            "capture_started",
            "pipeline_stopped",
            "pipeline_resumed",
            "pipeline_stopped",
        ]
    );
}

#[tokio::test]
async fn scanner_config_controls_dismissal_animation() {
    let harness = Harness::start_with(
        ScannerConfig {
            animated_dismissal: false,
            ..ScannerConfig::default()
        },
        authorized(),
    );

    harness.handle.activate().unwrap();
    harness
        .handle
        .deliver_metadata(vec![MetadataObject::qr("quiet")])
        .unwrap();

    let presenter = harness.platform.presenter.clone();
    harness.finish().await;
    assert_eq!(presenter.dismissals(), vec![false]);
}

#[tokio::test]
async fn handle_reports_closed_session_after_dismissal() {
    let harness = Harness::start(authorized());
    let handle = harness.handle.clone();

    handle.activate().unwrap();
    handle
        .deliver_metadata(vec![MetadataObject::qr("done")])
        .unwrap();
    harness.finish().await;

    let err = handle.view_will_appear().unwrap_err();
    assert_eq!(err.code, ErrorCode::SessionClosed);
    assert_eq!(
        err.details.get("session_id"),
        Some(&handle.session_id().to_string())
    );
}
