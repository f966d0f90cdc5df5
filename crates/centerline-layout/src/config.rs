//! Layout tunables.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Fixed placement, sizing, and export parameters.
///
/// Every field has a default; a partial JSON object deserializes with the
/// remaining fields filled in from [`LayoutConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Upper bound on an element's width and height at creation time.
    pub max_element_size: u32,

    /// Top-left position given to a newly ingested reference element.
    pub reference_position: Point,

    /// Top-left corner of the window regular elements are scattered in.
    pub scatter_origin: Point,

    /// Side length of the square scatter window. Regular elements land in
    /// `[origin, origin + extent)` on each axis.
    pub scatter_extent: f64,

    /// CSS height of the workspace surface in pixels. Width follows the
    /// page layout.
    pub workspace_height: u32,

    /// Filename used for the exported PNG.
    pub export_filename: String,

    /// How long a notification stays on screen, in milliseconds.
    pub toast_duration_ms: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_element_size: 200,
            reference_position: Point::new(400.0, 200.0),
            scatter_origin: Point::new(100.0, 100.0),
            scatter_extent: 200.0,
            workspace_height: 600,
            export_filename: String::from("aligned-elements.png"),
            toast_duration_ms: 4000,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = LayoutConfig::default();
        assert_eq!(config.max_element_size, 200);
        assert_eq!(config.reference_position, Point::new(400.0, 200.0));
        assert_eq!(config.scatter_origin, Point::new(100.0, 100.0));
        assert!((config.scatter_extent - 200.0).abs() < f64::EPSILON);
        assert_eq!(config.workspace_height, 600);
        assert_eq!(config.export_filename, "aligned-elements.png");
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{ "max_element_size": 120 }"#).unwrap();
        assert_eq!(config.max_element_size, 120);
        assert_eq!(config.export_filename, "aligned-elements.png");
        assert_eq!(config.reference_position, Point::new(400.0, 200.0));
    }
}
