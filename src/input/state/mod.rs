mod core;
mod mouse;

pub use core::{DragState, InputState};
