//! ScanDelegate port - Receives the decoded code.

use crate::domain::scan::DecodedCode;

/// Listener for the single decoded value of a session.
///
/// Sessions hold delegates weakly; a delegate that has been dropped simply
/// misses the event.
pub trait ScanDelegate: Send + Sync {
    fn did_scan(&self, code: &DecodedCode);
}
