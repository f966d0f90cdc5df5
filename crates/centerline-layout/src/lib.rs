//! centerline-layout: Placement state and layout rules (sans-IO).
//!
//! Owns the ordered store of placed elements and every rule that moves
//! them: initial placement at ingestion, drag-and-drop repositioning, and
//! center alignment against the reference element.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! bytes and plain coordinates. All browser interaction lives in
//! `centerline-io`.

pub mod align;
pub mod config;
pub mod controls;
pub mod drag;
pub mod ingest;
pub mod join;
pub mod notify;
pub mod store;
pub mod types;

pub use align::AlignError;
pub use config::LayoutConfig;
pub use controls::Controls;
pub use drag::DragSession;
pub use ingest::{ACCEPTED_EXTENSIONS, DecodedImage, IngestError, accept_attribute};
pub use join::{Completion, CompletionJoin, JoinSummary};
pub use notify::{Toast, ToastId, ToastQueue, ToastVariant};
pub use store::{PlacementStore, StoreError};
pub use types::{ElementDraft, ElementId, ImagePayload, PlacedElement, Point, Rect, Role, Size};

/// Decode an upload and place it in `store`.
///
/// This is the whole per-file ingestion step after the bytes have been
/// read: header decode, sizing, initial placement, append.
///
/// # Errors
///
/// Returns [`IngestError`] if the bytes are not a decodable image, or
/// [`StoreError::ReferenceExists`] (wrapped in [`PlaceError::Store`]) if
/// `role` is [`Role::Reference`] and one is already placed.
pub fn place_upload<R: rand::Rng + ?Sized>(
    store: &mut PlacementStore,
    bytes: Vec<u8>,
    role: Role,
    config: &LayoutConfig,
    rng: &mut R,
) -> Result<ElementId, PlaceError> {
    let decoded = ingest::decode(bytes)?;
    let draft = ingest::draft(decoded, role, config, rng);
    Ok(store.append(draft)?)
}

/// Failure to place an uploaded file.
#[derive(Debug, thiserror::Error)]
pub enum PlaceError {
    /// The file could not be decoded.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The store refused the new element.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A decode failure is a failed upload; a store refusal is a rejected one.
impl From<&PlaceError> for Completion {
    fn from(err: &PlaceError) -> Self {
        match err {
            PlaceError::Ingest(_) => Self::Failed,
            PlaceError::Store(_) => Self::Rejected,
        }
    }
}
