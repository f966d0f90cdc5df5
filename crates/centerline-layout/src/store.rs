//! The placement store: single owner of every placed element.
//!
//! All mutation goes through a closed set of operations: [`append`],
//! [`reposition`], [`center_on`], [`align_to_reference`], and [`clear`].
//! Elements are kept in insertion order, which is also the export paint
//! order.
//!
//! [`append`]: PlacementStore::append
//! [`reposition`]: PlacementStore::reposition
//! [`center_on`]: PlacementStore::center_on
//! [`align_to_reference`]: PlacementStore::align_to_reference
//! [`clear`]: PlacementStore::clear

use tracing::debug;

use crate::align::{self, AlignError};
use crate::types::{ElementDraft, ElementId, PlacedElement, Point};

/// Errors returned by store mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A reference element is already present; at most one may exist.
    #[error("a reference element is already placed")]
    ReferenceExists,

    /// No element with this identity is in the store.
    #[error("unknown element: {0}")]
    UnknownElement(ElementId),
}

/// Ordered collection of placed elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementStore {
    elements: Vec<PlacedElement>,
    next_id: u64,
}

impl PlacementStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            next_id: 0,
        }
    }

    /// Number of placed elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if nothing is placed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All elements in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[PlacedElement] {
        &self.elements
    }

    /// Look up an element by identity.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&PlacedElement> {
        self.elements.iter().find(|el| el.id() == id)
    }

    /// The reference element, if one has been placed.
    #[must_use]
    pub fn reference(&self) -> Option<&PlacedElement> {
        self.elements.iter().find(|el| el.is_reference())
    }

    /// Returns `true` if a reference element has been placed.
    #[must_use]
    pub fn has_reference(&self) -> bool {
        self.reference().is_some()
    }

    /// Center of the reference element, where the guide lines cross.
    #[must_use]
    pub fn reference_center(&self) -> Option<Point> {
        self.reference().map(PlacedElement::center)
    }

    /// Place a new element at the end of the store and return its identity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ReferenceExists`] if `draft` is a reference
    /// and the store already holds one. The store is left unchanged.
    pub fn append(&mut self, draft: ElementDraft) -> Result<ElementId, StoreError> {
        if draft.role.is_reference() && self.has_reference() {
            return Err(StoreError::ReferenceExists);
        }
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        debug!(%id, role = ?draft.role, x = draft.position.x, y = draft.position.y, "element placed");
        self.elements.push(PlacedElement::from_draft(id, draft));
        Ok(id)
    }

    /// Move an element so its top-left corner is at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownElement`] if `id` is not in the store.
    pub fn reposition(&mut self, id: ElementId, position: Point) -> Result<(), StoreError> {
        let el = self
            .elements
            .iter_mut()
            .find(|el| el.id() == id)
            .ok_or(StoreError::UnknownElement(id))?;
        el.set_position(position);
        Ok(())
    }

    /// Move an element so its center is at `center`, returning the new
    /// top-left position.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownElement`] if `id` is not in the store.
    pub fn center_on(&mut self, id: ElementId, center: Point) -> Result<Point, StoreError> {
        let size = self
            .get(id)
            .ok_or(StoreError::UnknownElement(id))?
            .size();
        let position = size.top_left_for_center(center);
        self.reposition(id, position)?;
        Ok(position)
    }

    /// Center every non-reference element on the reference center.
    ///
    /// Returns the number of elements moved. The reference itself does
    /// not move.
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::NoReference`] if no reference is placed; no
    /// element is moved in that case.
    pub fn align_to_reference(&mut self) -> Result<usize, AlignError> {
        let plan = align::plan(&self.elements)?;
        for (id, position) in &plan {
            if let Some(el) = self.elements.iter_mut().find(|el| el.id() == *id) {
                el.set_position(*position);
            }
        }
        debug!(moved = plan.len(), "aligned to reference");
        Ok(plan.len())
    }

    /// Remove every element, including the reference. Returns how many
    /// were removed.
    ///
    /// Identities are not reused after a clear.
    pub fn clear(&mut self) -> usize {
        let removed = self.elements.len();
        self.elements.clear();
        debug!(removed, "store cleared");
        removed
    }
}
