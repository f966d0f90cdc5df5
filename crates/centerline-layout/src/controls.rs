//! Which actions are available for the current store contents.

use crate::store::PlacementStore;

/// Enabled state of each control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// The reference picker; disabled once a reference exists.
    pub upload_reference: bool,
    /// The element picker; always enabled.
    pub upload_elements: bool,
    /// Requires a reference and at least one other element.
    pub align: bool,
    /// Requires at least one element.
    pub export: bool,
    /// Requires at least one element.
    pub clear: bool,
}

impl Controls {
    /// Derive every control's state from what is placed.
    #[must_use]
    pub fn from_store(store: &PlacementStore) -> Self {
        let has_reference = store.has_reference();
        let has_elements = !store.is_empty();
        Self {
            upload_reference: !has_reference,
            upload_elements: true,
            align: has_reference && store.len() >= 2,
            export: has_elements,
            clear: has_elements,
        }
    }
}
