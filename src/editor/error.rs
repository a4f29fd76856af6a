//! Rejected edit operations.

use super::EditTarget;
use thiserror::Error;

/// Reasons an edit operation was rejected.
///
/// A rejected operation leaves the editor state untouched. Callers on the
/// interactive path log these and carry on; none of them is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    /// The editing tool is not active, so pointer input is not accepted.
    #[error("editing tool is not active")]
    ToolInactive,

    /// The referenced polygon does not exist.
    #[error("no polygon at {target}")]
    InvalidPolygon { target: EditTarget },

    /// The referenced vertex does not exist in an existing polygon.
    #[error("no point {point_index} in {target} ({len} points)")]
    InvalidPoint {
        target: EditTarget,
        point_index: usize,
        len: usize,
    },
}

impl EditError {
    /// True for the out-of-range family (bad polygon or point reference).
    pub fn is_invalid_target(&self) -> bool {
        matches!(self, Self::InvalidPolygon { .. } | Self::InvalidPoint { .. })
    }
}
