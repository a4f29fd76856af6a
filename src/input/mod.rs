//! Pointer input handling and tool selection.
//!
//! This module translates canvas pointer events into polygon edits. It owns
//! the tool gate, hit-tests presses against vertex handles and edges, and
//! drives the editor with the gate state passed explicitly on every call.

pub mod events;
pub mod hit;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{MouseButton, PointerEvent};
pub use hit::{HitSlop, HitTarget};
pub use state::{DragState, InputState};
pub use tool::{Tool, ToolGate, ToolTransition};
