//! Configuration enum types.

use crate::draw::{Color, color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a palette name, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Palette name
/// outline_color = "outline"
///
/// # Hex notation
/// preview_color = "#666666"
///
/// # Custom RGB color (0-255 per component)
/// handle_color = [187, 187, 187]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Palette name (outline, preview, handle, preview-handle, white, black,
    /// transparent) or `#rrggbb` / `#rgb` hex
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a [`Color`].
    ///
    /// Unknown names resolve to `fallback` with a warning.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => color::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using default", name);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Whether the specification resolves to a color.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => color::name_to_color(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }
}
