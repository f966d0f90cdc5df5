//! Measuring the workspace surface in the live document.
//!
//! The workspace is looked up by element id and measured on every call,
//! so scrolling and layout changes between drags are always reflected.

use centerline_layout::{Point, Rect};

/// DOM id of the workspace surface element.
pub const WORKSPACE_ID: &str = "centerline-workspace";

/// Errors that can occur when measuring the workspace.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// A browser API call returned an error or a required object was missing.
    #[error("browser API error: {0}")]
    JsError(String),
}

/// Current on-screen bounds of the workspace, in client coordinates.
///
/// # Errors
///
/// Returns [`SurfaceError::JsError`] if the window or document is
/// unavailable, or the workspace element is not mounted.
pub fn measure_workspace() -> Result<Rect, SurfaceError> {
    let window =
        web_sys::window().ok_or_else(|| SurfaceError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| SurfaceError::JsError("no document".into()))?;
    let element = document
        .get_element_by_id(WORKSPACE_ID)
        .ok_or_else(|| SurfaceError::JsError(format!("no element with id {WORKSPACE_ID:?}")))?;

    let bounds = element.get_bounding_client_rect();
    Ok(Rect::new(
        Point::new(bounds.left(), bounds.top()),
        bounds.width(),
        bounds.height(),
    ))
}
