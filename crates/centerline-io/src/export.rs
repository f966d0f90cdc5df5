//! The export action: measure, composite, download.

use centerline_export::{CompositeError, PNG_MIME};
use centerline_layout::{JoinSummary, PlacementStore};
use tracing::debug;

use crate::download::{self, DownloadError};
use crate::surface::{self, SurfaceError};

/// Errors that can occur while exporting the workspace.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The workspace could not be measured.
    #[error("could not measure the workspace: {0}")]
    Surface(#[from] SurfaceError),

    /// Compositing or encoding failed.
    #[error(transparent)]
    Composite(#[from] CompositeError),

    /// The browser refused the download.
    #[error("download failed: {0}")]
    Download(#[from] DownloadError),
}

/// Flatten the store at the workspace's current size and download it as
/// `filename`.
///
/// Returns how many elements were drawn and skipped.
///
/// # Errors
///
/// Returns [`ExportError`] if measuring, compositing, or the download fails.
pub fn export_workspace(store: &PlacementStore, filename: &str) -> Result<JoinSummary, ExportError> {
    let extent = surface::measure_workspace()?.pixel_size();
    let composite = centerline_export::composite(store.elements(), extent)?;
    download::trigger_download(&composite.png, filename, PNG_MIME)?;
    debug!(
        bytes = composite.png.len(),
        width = extent.width,
        height = extent.height,
        "export downloaded"
    );
    Ok(composite.summary)
}
