//! Generic pointer event types delivered by the canvas collaborator.

use crate::draw::Point;
use serde::Deserialize;

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Primary button (places, drags, and inserts vertices)
    #[default]
    Left,
    /// Secondary button (cancels a drag or pending insertion)
    Right,
    /// Middle button (currently unused)
    Middle,
}

/// A raw pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press { button: MouseButton, position: Point },
    Motion { position: Point },
    Release { button: MouseButton, position: Point },
}
