//! Shared types for the centerline workspace.

use std::fmt;
use std::rc::Rc;

use base64::Engine;
use serde::{Deserialize, Serialize};

/// A 2D point in workspace-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (pixels from the left edge).
    pub x: f64,
    /// Vertical position (pixels from the top edge).
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn offset_from(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// Pixel extent of an element or a raster surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Half the width and height, as used by the centering math.
    #[must_use]
    pub fn half(self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Top-left corner that places a box of this size centered on `center`.
    #[must_use]
    pub fn top_left_for_center(self, center: Point) -> Point {
        let (hw, hh) = self.half();
        Point::new(center.x - hw, center.y - hh)
    }
}

/// An on-screen rectangle in client (viewport) coordinates.
///
/// Used for the workspace bounds, which are measured fresh at every drop
/// and export so scrolling or layout shifts are picked up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner in client coordinates.
    pub origin: Point,
    /// Rendered width in CSS pixels.
    pub width: f64,
    /// Rendered height in CSS pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Translate a client-space point into this rectangle's local space.
    #[must_use]
    pub fn to_local(&self, client: Point) -> Point {
        client.offset_from(self.origin)
    }

    /// Whole-pixel extent of the rectangle, rounded to the nearest
    /// pixel. Negative or non-finite extents clamp to zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixel_size(&self) -> Size {
        let px = |v: f64| {
            if v.is_finite() {
                v.round().clamp(0.0, f64::from(u32::MAX)) as u32
            } else {
                0
            }
        };
        Size::new(px(self.width), px(self.height))
    }
}

/// Opaque identity of a placed element.
///
/// Assigned by [`PlacementStore::append`](crate::PlacementStore::append)
/// and never reused within a store, even across a clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element-{}", self.0)
    }
}

/// Whether an element is the alignment target or an ordinary element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Role {
    /// The single element every other element is aligned to.
    Reference,
    /// Any other element.
    #[default]
    Regular,
}

impl Role {
    /// Returns `true` for [`Role::Reference`].
    #[must_use]
    pub const fn is_reference(self) -> bool {
        matches!(self, Self::Reference)
    }
}

/// Encoded image bytes plus a `data:` URL for direct use as `<img src>`.
///
/// The bytes are kept so the compositor can decode the image again at
/// export time. Both are reference counted so cloning an element is cheap.
#[derive(Clone)]
pub struct ImagePayload {
    bytes: Rc<[u8]>,
    mime: &'static str,
    data_url: Rc<str>,
}

impl ImagePayload {
    /// Wrap encoded image bytes with their MIME type.
    ///
    /// The bytes are not validated here; see [`crate::ingest::decode`].
    #[must_use]
    pub fn new(bytes: Vec<u8>, mime: &'static str) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
        let data_url = format!("data:{mime};base64,{encoded}");
        Self {
            bytes: bytes.into(),
            mime,
            data_url: data_url.into(),
        }
    }

    /// The original encoded file bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// MIME type sniffed from the bytes (e.g. `image/png`).
    #[must_use]
    pub const fn mime(&self) -> &'static str {
        self.mime
    }

    /// `data:<mime>;base64,<payload>` URL.
    #[must_use]
    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

impl fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePayload")
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

/// Payloads compare by identity: two payloads are equal only when they
/// share the same allocation. Keeps Dioxus prop diffing off the pixel data.
impl PartialEq for ImagePayload {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.bytes, &other.bytes)
    }
}

/// Everything needed to place a new element, before the store assigns
/// it an identity.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDraft {
    /// Decoded image resource.
    pub payload: ImagePayload,
    /// Initial top-left position.
    pub position: Point,
    /// Fixed display size.
    pub size: Size,
    /// Reference or regular.
    pub role: Role,
}

/// One image instance positioned on the workspace.
///
/// Only the position can change after creation, and only through the
/// [`PlacementStore`](crate::PlacementStore) that owns the element.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedElement {
    id: ElementId,
    payload: ImagePayload,
    position: Point,
    size: Size,
    role: Role,
}

impl PlacedElement {
    pub(crate) fn from_draft(id: ElementId, draft: ElementDraft) -> Self {
        Self {
            id,
            payload: draft.payload,
            position: draft.position,
            size: draft.size,
            role: draft.role,
        }
    }

    pub(crate) const fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Identity assigned at creation.
    #[must_use]
    pub const fn id(&self) -> ElementId {
        self.id
    }

    /// Image resource for display and export.
    #[must_use]
    pub const fn payload(&self) -> &ImagePayload {
        &self.payload
    }

    /// Current top-left corner.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Display size fixed at creation.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Reference or regular.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns `true` if this is the reference element.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        self.role.is_reference()
    }

    /// Center point of the element's box.
    #[must_use]
    pub fn center(&self) -> Point {
        let (hw, hh) = self.size.half();
        Point::new(self.position.x + hw, self.position.y + hh)
    }
}
