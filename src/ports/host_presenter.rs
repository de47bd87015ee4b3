//! HostPresenter port - The presentation layer hosting the scanner view.

use crate::domain::scan::PreviewBounds;

/// Port for the view that presents the scanner.
pub trait HostPresenter: Send + Sync {
    /// Current bounds of the host view; the preview is sized to match.
    fn host_bounds(&self) -> PreviewBounds;

    /// Ask the presentation layer to dismiss the scanner view.
    fn dismiss(&self, animated: bool);
}
