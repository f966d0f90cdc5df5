//! Flatten placed elements onto an opaque white raster and encode it as PNG.
//!
//! Elements are painted in store order, so later insertions cover earlier
//! ones where they overlap. Each element's payload is decoded again from
//! its original bytes and scaled to the element's fixed size.

use centerline_layout::{Completion, CompletionJoin, JoinSummary, PlacedElement, Size};
use image::ImageEncoder;
use tiny_skia::{Color, ColorU8, FilterQuality, Pixmap, PixmapPaint, Transform};
use tracing::{debug, warn};

/// MIME type of the exported file.
pub const PNG_MIME: &str = "image/png";

/// Errors that can occur while compositing.
#[derive(Debug, thiserror::Error)]
pub enum CompositeError {
    /// The requested surface has a zero (or unrepresentable) extent.
    #[error("cannot allocate a {width}x{height} surface")]
    EmptySurface { width: u32, height: u32 },

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    PngEncode(String),
}

impl From<image::ImageError> for CompositeError {
    fn from(err: image::ImageError) -> Self {
        Self::PngEncode(err.to_string())
    }
}

/// A flattened, encoded workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    /// PNG file bytes.
    pub png: Vec<u8>,
    /// Pixel extent of the image.
    pub size: Size,
    /// How many elements were drawn and how many were skipped because
    /// their payload no longer decodes.
    pub summary: JoinSummary,
}

/// Paint `elements` onto a white `surface`-sized raster and encode it.
///
/// An empty `elements` slice produces a plain white image.
///
/// # Errors
///
/// Returns [`CompositeError::EmptySurface`] if either side of `surface`
/// is zero.
/// Returns [`CompositeError::PngEncode`] if PNG encoding fails.
pub fn composite(elements: &[PlacedElement], surface: Size) -> Result<Composite, CompositeError> {
    let mut canvas = Pixmap::new(surface.width, surface.height).ok_or(
        CompositeError::EmptySurface {
            width: surface.width,
            height: surface.height,
        },
    )?;
    canvas.fill(Color::WHITE);

    let mut join = CompletionJoin::new(elements.len());
    for el in elements {
        let completion = match decode_to_pixmap(el) {
            Some(source) => {
                draw_scaled(&mut canvas, &source, el);
                Completion::Succeeded
            }
            None => Completion::Failed,
        };
        join.report(completion);
    }

    // Every element reports exactly once, so the join is resolved here;
    // with no elements it was resolved from the start.
    let summary = join.summary().unwrap_or_default();
    debug!(
        drawn = summary.succeeded,
        skipped = summary.failed,
        width = surface.width,
        height = surface.height,
        "composited workspace"
    );

    let png = encode_png(&canvas)?;
    Ok(Composite {
        png,
        size: surface,
        summary,
    })
}

/// Decode an element's payload into a premultiplied pixmap at its
/// natural resolution.
fn decode_to_pixmap(el: &PlacedElement) -> Option<Pixmap> {
    let decoded = match image::load_from_memory(el.payload().bytes()) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            warn!(id = %el.id(), "skipping element in export: {e}");
            return None;
        }
    };

    let Some(mut pixmap) = Pixmap::new(decoded.width(), decoded.height()) else {
        warn!(id = %el.id(), "skipping element in export: zero-sized image");
        return None;
    };
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(decoded.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

/// Draw `source` scaled to the element's size with its top-left corner at
/// the element's position.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn draw_scaled(canvas: &mut Pixmap, source: &Pixmap, el: &PlacedElement) {
    let size = el.size();
    let position = el.position();
    let sx = size.width as f32 / source.width() as f32;
    let sy = size.height as f32 / source.height() as f32;
    let transform = Transform::from_row(sx, 0.0, 0.0, sy, position.x as f32, position.y as f32);

    let paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..PixmapPaint::default()
    };
    canvas.draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);
}

/// Encode the canvas as an RGBA PNG.
fn encode_png(canvas: &Pixmap) -> Result<Vec<u8>, CompositeError> {
    // The white fill keeps every pixel opaque, but demultiply anyway so
    // the encoder always sees straight alpha.
    let mut rgba = Vec::with_capacity(canvas.data().len());
    for px in canvas.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let mut png = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png);
    encoder.write_image(
        &rgba,
        canvas.width(),
        canvas.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(png)
}
