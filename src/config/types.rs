//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Polygon editing behavior.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EditorConfig {
    /// Distance to the first vertex (canvas units) within which a click closes
    /// the in-progress polygon (valid range: 1.0 - 100.0)
    #[serde(default = "default_close_threshold")]
    pub close_threshold: f64,

    /// Tool selected at startup ("pen" enables editing; "" or "none" disables it)
    #[serde(default = "default_tool")]
    pub default_tool: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            close_threshold: default_close_threshold(),
            default_tool: default_tool(),
        }
    }
}

/// Interaction handle sizes.
///
/// These drive both what the renderer draws and what the pointer hit test
/// accepts, so a handle is exactly as large as it looks.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct HandleConfig {
    /// Vertex handle radius in canvas units (valid range: 1.0 - 20.0)
    #[serde(default = "default_vertex_radius")]
    pub vertex_radius: f64,

    /// Width of the invisible clickable stroke over each edge (valid range: 2.0 - 60.0)
    #[serde(default = "default_edge_hit_width")]
    pub edge_hit_width: f64,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            vertex_radius: default_vertex_radius(),
            edge_hit_width: default_edge_hit_width(),
        }
    }
}

/// Stroke and fill styling for the polygon scene.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StyleConfig {
    /// Closed polygon outline color
    #[serde(default = "default_outline_color")]
    pub outline_color: ColorSpec,

    /// In-progress dashed preview color
    #[serde(default = "default_preview_color")]
    pub preview_color: ColorSpec,

    /// Vertex handle fill on closed polygons
    #[serde(default = "default_handle_color")]
    pub handle_color: ColorSpec,

    /// Vertex handle fill on the in-progress polygon
    #[serde(default = "default_preview_handle_color")]
    pub preview_handle_color: ColorSpec,

    /// Border color around vertex handles
    #[serde(default = "default_handle_stroke_color")]
    pub handle_stroke_color: ColorSpec,

    /// Outline stroke width (valid range: 0.5 - 10.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Handle border width (valid range: 0.0 - 5.0)
    #[serde(default = "default_handle_stroke_width")]
    pub handle_stroke_width: f64,

    /// Preview dash pattern [on, off] (each 0.5 - 50.0)
    #[serde(default = "default_dash")]
    pub dash: [f64; 2],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            outline_color: default_outline_color(),
            preview_color: default_preview_color(),
            handle_color: default_handle_color(),
            preview_handle_color: default_preview_handle_color(),
            handle_stroke_color: default_handle_stroke_color(),
            stroke_width: default_stroke_width(),
            handle_stroke_width: default_handle_stroke_width(),
            dash: default_dash(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_close_threshold() -> f64 {
    crate::editor::DEFAULT_CLOSE_THRESHOLD
}

fn default_tool() -> String {
    "none".to_string()
}

fn default_vertex_radius() -> f64 {
    4.0
}

fn default_edge_hit_width() -> f64 {
    20.0
}

fn default_outline_color() -> ColorSpec {
    ColorSpec::Name("#333333".to_string())
}

fn default_preview_color() -> ColorSpec {
    ColorSpec::Name("#666666".to_string())
}

fn default_handle_color() -> ColorSpec {
    ColorSpec::Name("#bbbbbb".to_string())
}

fn default_preview_handle_color() -> ColorSpec {
    ColorSpec::Name("#777777".to_string())
}

fn default_handle_stroke_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_stroke_width() -> f64 {
    1.5
}

fn default_handle_stroke_width() -> f64 {
    0.5
}

fn default_dash() -> [f64; 2] {
    [4.0, 3.0]
}
