//! Drag-and-drop repositioning.
//!
//! A drag only records which element is being moved. Nothing changes in
//! the store until the drop, where the pointer position is translated into
//! workspace-local coordinates and the element's center is placed there.

use tracing::{debug, warn};

use crate::store::PlacementStore;
use crate::types::{ElementId, Point, Rect};

/// The single in-flight drag, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragSession {
    active: Option<ElementId>,
}

impl DragSession {
    /// Create an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Record `id` as the element being dragged, replacing any previous one.
    pub const fn begin(&mut self, id: ElementId) {
        self.active = Some(id);
    }

    /// The element currently being dragged.
    #[must_use]
    pub const fn active(&self) -> Option<ElementId> {
        self.active
    }

    /// Forget the in-flight drag without moving anything.
    pub const fn cancel(&mut self) {
        self.active = None;
    }

    /// Finish the drag at `client` (viewport coordinates).
    ///
    /// `workspace` is the workspace surface as measured right now; `None`
    /// means it could not be measured. The dragged element's center is
    /// moved to the drop point and its new top-left position is returned.
    ///
    /// Returns `None` and leaves the store untouched when no drag is in
    /// flight, the workspace is unavailable, or the dragged element is no
    /// longer in the store. The session is idle afterward in every case.
    pub fn drop_at(
        &mut self,
        client: Point,
        workspace: Option<Rect>,
        store: &mut PlacementStore,
    ) -> Option<Point> {
        let id = self.active.take()?;
        let Some(workspace) = workspace else {
            debug!(%id, "drop ignored: workspace unavailable");
            return None;
        };

        let local = workspace.to_local(client);
        match store.center_on(id, local) {
            Ok(position) => Some(position),
            Err(e) => {
                warn!(%id, "drop ignored: {e}");
                None
            }
        }
    }
}
