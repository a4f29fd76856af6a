//! Polygon editing engine.
//!
//! Owns the completed polygons and the single in-progress point sequence, and
//! exposes the only operations allowed to mutate them: placing a point (which
//! may close the polygon), inserting a vertex into an edge, moving a vertex,
//! and discarding the in-progress polygon when the editing tool goes away.
//!
//! The engine never looks at global state. Whether the editing tool is active
//! is passed in by the caller on every operation.

mod engine;
mod error;
#[cfg(test)]
mod tests;

pub use engine::{DEFAULT_CLOSE_THRESHOLD, EditOutcome, EditTarget, PolygonEditor};
pub use error::EditError;
