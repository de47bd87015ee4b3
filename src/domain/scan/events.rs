//! Scan session events.

use serde::{Deserialize, Serialize};

use super::{DecodedCode, DeviceType};
use crate::domain::foundation::{SessionId, Timestamp};

/// Facts recorded over the lifetime of a scan session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScanEvent {
    Activated {
        session_id: SessionId,
        at: Timestamp,
    },

    AuthorizationRequested {
        session_id: SessionId,
        at: Timestamp,
    },

    AuthorizationResolved {
        session_id: SessionId,
        granted: bool,
        at: Timestamp,
    },

    /// Capture was configured and the pipeline started.
    CaptureStarted {
        session_id: SessionId,
        device_id: String,
        device_type: DeviceType,
        at: Timestamp,
    },

    PipelineResumed {
        session_id: SessionId,
        at: Timestamp,
    },

    PipelineStopped {
        session_id: SessionId,
        at: Timestamp,
    },

    CodeScanned {
        session_id: SessionId,
        code: DecodedCode,
        at: Timestamp,
    },

    Failed {
        session_id: SessionId,
        reason: String,
        at: Timestamp,
    },

    Dismissed {
        session_id: SessionId,
        animated: bool,
        at: Timestamp,
    },
}

impl ScanEvent {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ScanEvent::Activated { .. } => "activated",
            ScanEvent::AuthorizationRequested { .. } => "authorization_requested",
            ScanEvent::AuthorizationResolved { .. } => "authorization_resolved",
            ScanEvent::CaptureStarted { .. } => "capture_started",
            ScanEvent::PipelineResumed { .. } => "pipeline_resumed",
            ScanEvent::PipelineStopped { .. } => "pipeline_stopped",
            ScanEvent::CodeScanned { .. } => "code_scanned",
            ScanEvent::Failed { .. } => "failed",
            ScanEvent::Dismissed { .. } => "dismissed",
        }
    }
}
