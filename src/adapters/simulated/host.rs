//! Recording host presenter and delegate.

use std::sync::Mutex;

use tokio::sync::mpsc;

use crate::domain::scan::{DecodedCode, PreviewBounds};
use crate::ports::{HostPresenter, ScanDelegate};

/// Presenter that records dismissal requests.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
#[derive(Debug)]
pub struct RecordingPresenter {
    bounds: PreviewBounds,
    dismissals: Mutex<Vec<bool>>,
}

impl RecordingPresenter {
    pub fn new(bounds: PreviewBounds) -> Self {
        Self {
            bounds,
            dismissals: Mutex::new(Vec::new()),
        }
    }

    /// The `animated` flag of every dismissal, in order.
    pub fn dismissals(&self) -> Vec<bool> {
        self.dismissals
            .lock()
            .expect("RecordingPresenter: dismissals lock poisoned")
            .clone()
    }

    pub fn dismiss_count(&self) -> usize {
        self.dismissals().len()
    }
}

impl HostPresenter for RecordingPresenter {
    fn host_bounds(&self) -> PreviewBounds {
        self.bounds
    }

    fn dismiss(&self, animated: bool) {
        self.dismissals
            .lock()
            .expect("RecordingPresenter: dismissals lock poisoned")
            .push(animated);
    }
}

/// Delegate that records codes and optionally forwards them to a channel.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
#[derive(Debug, Default)]
pub struct RecordingDelegate {
    codes: Mutex<Vec<DecodedCode>>,
    forward: Option<mpsc::UnboundedSender<DecodedCode>>,
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also sends every code to `tx`.
    pub fn with_channel(tx: mpsc::UnboundedSender<DecodedCode>) -> Self {
        Self {
            codes: Mutex::new(Vec::new()),
            forward: Some(tx),
        }
    }

    pub fn codes(&self) -> Vec<DecodedCode> {
        self.codes
            .lock()
            .expect("RecordingDelegate: codes lock poisoned")
            .clone()
    }
}

impl ScanDelegate for RecordingDelegate {
    fn did_scan(&self, code: &DecodedCode) {
        self.codes
            .lock()
            .expect("RecordingDelegate: codes lock poisoned")
            .push(code.clone());
        if let Some(tx) = &self.forward {
            // Receiver gone means nobody is listening any more.
            let _ = tx.send(code.clone());
        }
    }
}
