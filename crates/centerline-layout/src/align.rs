//! Center alignment against the reference element.
//!
//! Alignment is computed as a plan first and applied second, so a store
//! without a reference is never partially modified.

use crate::types::{ElementId, PlacedElement, Point};

/// Errors that can occur when aligning elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    /// The store has no reference element to align against.
    #[error("no reference element has been placed")]
    NoReference,
}

/// New top-left positions that put every non-reference element's center
/// on the reference center.
///
/// The reference element itself does not appear in the plan.
///
/// # Errors
///
/// Returns [`AlignError::NoReference`] if `elements` contains no
/// reference element.
pub fn plan(elements: &[PlacedElement]) -> Result<Vec<(ElementId, Point)>, AlignError> {
    let reference = elements
        .iter()
        .find(|el| el.is_reference())
        .ok_or(AlignError::NoReference)?;
    let center = reference.center();

    Ok(elements
        .iter()
        .filter(|el| !el.is_reference())
        .map(|el| (el.id(), el.size().top_left_for_center(center)))
        .collect())
}
