//! RGBA color type and the palette used by the polygon scene.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use polyscribe::draw::Color;
/// let outline = Color::from_hex("#333333").unwrap();
/// assert_eq!(outline, polyscribe::draw::color::OUTLINE);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Builds an opaque color from 0-255 channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#rgb` or `#rrggbb` hex notation (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }
        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(digits.chars()) {
                    let v = c.to_digit(16)? as u8;
                    *slot = v * 16 + v;
                }
                Some(Self::from_rgb8(channels[0], channels[1], channels[2]))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }
}

/// Closed polygon outline (#333)
pub const OUTLINE: Color = Color::new(0.2, 0.2, 0.2, 1.0);

/// In-progress dashed preview (#666)
pub const PREVIEW: Color = Color::new(0.4, 0.4, 0.4, 1.0);

/// Vertex handle fill on the in-progress polygon (#777)
pub const PREVIEW_HANDLE: Color = Color::new(
    0x77 as f64 / 255.0,
    0x77 as f64 / 255.0,
    0x77 as f64 / 255.0,
    1.0,
);

/// Vertex handle fill on closed polygons (#bbb)
pub const HANDLE: Color = Color::new(
    0xbb as f64 / 255.0,
    0xbb as f64 / 255.0,
    0xbb as f64 / 255.0,
    1.0,
);

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Fully transparent color, used for edge hit-lines
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

/// Maps color names and hex strings to Color values.
///
/// Used by the configuration system. Recognised names (case-insensitive):
/// "outline", "preview", "handle", "preview-handle", "white", "black",
/// "transparent". Anything else is tried as hex.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "outline" => Some(OUTLINE),
        "preview" => Some(PREVIEW),
        "handle" => Some(HANDLE),
        "preview-handle" => Some(PREVIEW_HANDLE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "transparent" => Some(TRANSPARENT),
        other => Color::from_hex(other),
    }
}
