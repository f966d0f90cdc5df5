//! Turning uploaded file bytes into element drafts.
//!
//! Decoding reads only the image header: the natural dimensions are all
//! placement needs, and the compositor decodes the full image again at
//! export time.

use std::io::Cursor;

use rand::Rng;

use crate::config::LayoutConfig;
use crate::types::{ElementDraft, ImagePayload, Point, Role, Size};

/// File extensions the decoder is compiled for. The upload picker offers
/// only these.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// `accept` attribute value for a file input: `.png,.jpg,...`.
#[must_use]
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Errors that can occur while decoding an uploaded file.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The file contained no bytes.
    #[error("file is empty")]
    EmptyInput,

    /// The bytes do not start with a known image signature.
    #[error("unrecognized image format")]
    UnrecognizedFormat,

    /// The header could not be decoded.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// A successfully decoded upload.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    /// Displayable payload (bytes + data URL).
    pub payload: ImagePayload,
    /// Natural pixel dimensions of the image.
    pub natural: Size,
}

/// Sniff the format of `bytes`, read the natural dimensions, and wrap the
/// bytes as a displayable payload.
///
/// # Errors
///
/// Returns [`IngestError::EmptyInput`] if `bytes` is empty.
/// Returns [`IngestError::UnrecognizedFormat`] if no format signature matches.
/// Returns [`IngestError::Decode`] if the header is corrupt or the format
/// is not compiled in.
pub fn decode(bytes: Vec<u8>) -> Result<DecodedImage, IngestError> {
    if bytes.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let format = image::guess_format(&bytes).map_err(|_| IngestError::UnrecognizedFormat)?;
    let (width, height) = image::ImageReader::with_format(Cursor::new(&bytes), format)
        .into_dimensions()?;

    Ok(DecodedImage {
        payload: ImagePayload::new(bytes, format.to_mime_type()),
        natural: Size::new(width, height),
    })
}

/// Cap each axis of `natural` at `max`, independently.
///
/// Aspect ratio is not preserved: a 400x100 image capped at 200 becomes
/// 200x100.
#[must_use]
pub fn capped_size(natural: Size, max: u32) -> Size {
    Size::new(natural.width.min(max), natural.height.min(max))
}

/// Initial top-left position for a new element.
///
/// The reference goes to the fixed reference position; regular elements
/// are scattered uniformly in the scatter window so they do not stack
/// exactly on top of each other.
pub fn initial_position<R: Rng + ?Sized>(role: Role, config: &LayoutConfig, rng: &mut R) -> Point {
    match role {
        Role::Reference => config.reference_position,
        Role::Regular => {
            let origin = config.scatter_origin;
            let extent = config.scatter_extent;
            Point::new(
                scatter(rng, origin.x, extent),
                scatter(rng, origin.y, extent),
            )
        }
    }
}

/// Uniform sample in `[start, start + extent)`. A non-positive extent
/// collapses the window to `start`.
fn scatter<R: Rng + ?Sized>(rng: &mut R, start: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        rng.gen_range(start..start + extent)
    } else {
        start
    }
}

/// Build the draft for a decoded upload.
pub fn draft<R: Rng + ?Sized>(
    decoded: DecodedImage,
    role: Role,
    config: &LayoutConfig,
    rng: &mut R,
) -> ElementDraft {
    ElementDraft {
        position: initial_position(role, config, rng),
        size: capped_size(decoded.natural, config.max_element_size),
        payload: decoded.payload,
        role,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    use super::*;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 10, 10, 255]));
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .unwrap();
        buf
    }

    #[test]
    fn empty_input_returns_error() {
        assert!(matches!(decode(vec![]), Err(IngestError::EmptyInput)));
    }

    #[test]
    fn unknown_signature_returns_error() {
        let result = decode(b"definitely not an image".to_vec());
        assert!(matches!(result, Err(IngestError::UnrecognizedFormat)));
    }

    #[test]
    fn truncated_png_returns_decode_error() {
        let mut bytes = png(4, 4);
        bytes.truncate(12);
        assert!(matches!(decode(bytes), Err(IngestError::Decode(_))));
    }

    #[test]
    fn valid_png_reports_natural_size_and_mime() {
        let decoded = decode(png(17, 31)).unwrap();
        assert_eq!(decoded.natural, Size::new(17, 31));
        assert_eq!(decoded.payload.mime(), "image/png");
        assert!(decoded.payload.data_url().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn capped_size_clamps_each_axis_independently() {
        assert_eq!(capped_size(Size::new(400, 100), 200), Size::new(200, 100));
        assert_eq!(capped_size(Size::new(150, 999), 200), Size::new(150, 200));
        assert_eq!(capped_size(Size::new(200, 200), 200), Size::new(200, 200));
    }

    #[test]
    fn reference_lands_at_fixed_position() {
        let config = LayoutConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let decoded = decode(png(500, 80)).unwrap();
        let d = draft(decoded, Role::Reference, &config, &mut rng);
        assert_eq!(d.position, Point::new(400.0, 200.0));
        assert_eq!(d.size, Size::new(200, 80));
        assert_eq!(d.role, Role::Reference);
    }

    #[test]
    fn regular_elements_scatter_inside_window() {
        let config = LayoutConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let p = initial_position(Role::Regular, &config, &mut rng);
            assert!((100.0..300.0).contains(&p.x), "x out of window: {}", p.x);
            assert!((100.0..300.0).contains(&p.y), "y out of window: {}", p.y);
        }
    }

    #[test]
    fn scatter_window_excludes_its_upper_edge() {
        let config = LayoutConfig::default();
        let mut rng = StepRng::new(u64::MAX, 0);
        let p = initial_position(Role::Regular, &config, &mut rng);
        assert!(p.x < 300.0 && p.y < 300.0, "landed on the edge: {p:?}");
        assert!(p.x >= 100.0 && p.y >= 100.0);
    }

    #[test]
    fn scatter_window_includes_its_lower_edge() {
        let config = LayoutConfig::default();
        let mut rng = StepRng::new(0, 0);
        let p = initial_position(Role::Regular, &config, &mut rng);
        assert_eq!(p, Point::new(100.0, 100.0));
    }

    #[test]
    fn empty_scatter_window_pins_to_origin() {
        let config = LayoutConfig {
            scatter_extent: 0.0,
            ..LayoutConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let p = initial_position(Role::Regular, &config, &mut rng);
        assert_eq!(p, config.scatter_origin);
    }

    #[test]
    fn accept_attribute_lists_every_extension() {
        assert_eq!(accept_attribute(), ".png,.jpg,.jpeg,.gif,.bmp,.webp");
    }

    #[test]
    fn every_accepted_extension_has_a_compiled_decoder() {
        for ext in ACCEPTED_EXTENSIONS {
            let format = image::ImageFormat::from_extension(ext)
                .unwrap_or_else(|| panic!("unknown extension {ext}"));
            assert!(format.reading_enabled(), "no decoder for .{ext}");
        }
    }

    #[test]
    fn offered_formats_decode() {
        let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            6,
            4,
            image::Rgb([10, 200, 30]),
        ));
        for (format, mime) in [
            (image::ImageFormat::Png, "image/png"),
            (image::ImageFormat::Jpeg, "image/jpeg"),
            (image::ImageFormat::Gif, "image/gif"),
            (image::ImageFormat::Bmp, "image/bmp"),
            (image::ImageFormat::WebP, "image/webp"),
        ] {
            let mut buf = Vec::new();
            img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
            let decoded = decode(buf).unwrap();
            assert_eq!(decoded.natural, Size::new(6, 4), "{format:?}");
            assert_eq!(decoded.payload.mime(), mime);
        }
    }

    #[test]
    fn vector_images_are_not_offered_and_do_not_decode() {
        assert!(!ACCEPTED_EXTENSIONS.contains(&"svg"));
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"/>"#;
        assert!(matches!(
            decode(svg.to_vec()),
            Err(IngestError::UnrecognizedFormat)
        ));
    }

    #[test]
    fn regular_draft_is_not_reference() {
        let config = LayoutConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let d = draft(decode(png(20, 250)).unwrap(), Role::Regular, &config, &mut rng);
        assert_eq!(d.role, Role::Regular);
        assert_eq!(d.size, Size::new(20, 200));
    }
}
