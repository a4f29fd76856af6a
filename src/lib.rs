//! Library exports for the polyscribe polygon authoring core.
//!
//! Exposes the polygon editing engine, the pointer-input collaborator that
//! drives it, the renderer-facing scene types, and configuration so that a
//! host canvas (or the bundled replay binary) can embed the editor.

pub mod config;
pub mod draw;
pub mod editor;
pub mod input;
pub mod replay;
pub mod util;

pub use config::Config;
pub use editor::{EditError, EditOutcome, EditTarget, PolygonEditor};
