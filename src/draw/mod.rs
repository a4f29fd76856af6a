//! Polygon data model and the renderer-facing output of the editor.
//!
//! This module defines the core drawing types used by the polygon canvas:
//! - [`Point`] and [`Polygon`]: the geometry the editor mutates
//! - [`Color`]: RGBA color representation with the canvas palette
//! - [`Scene`]: the display list a renderer draws, with interactivity flags
//! - [`DirtyTracker`]: damage rectangles between renders

pub mod color;
pub mod dirty;
pub mod polygon;
pub mod scene;

// Re-export commonly used types at module level
pub use color::Color;
pub use dirty::DirtyTracker;
pub use polygon::{Point, Polygon, PolygonId, distance};
pub use scene::{Scene, SceneElement, SceneStyle};
