//! Small geometry helpers shared by the editor, hit testing, and dirty tracking.

use crate::draw::Point;

/// Axis-aligned rectangle helper used for dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    ///
    /// Returns `None` when the extent does not fit in an `i32`.
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(
            min_x,
            min_y,
            max_x.checked_sub(min_x)?,
            max_y.checked_sub(min_y)?,
        )
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Shortest distance from `point` to the segment `start..end`.
///
/// Degenerate segments (both ends at the same spot) fall back to the distance
/// to `start`.
pub fn point_to_segment_distance(point: Point, start: Point, end: Point) -> f64 {
    let (dx, dy) = (end.x - start.x, end.y - start.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq < 1e-9 {
        return point.distance_to(start);
    }
    let t = (((point.x - start.x) * dx + (point.y - start.y) * dy) / len_sq).clamp(0.0, 1.0);
    point.distance_to(Point::new(start.x + t * dx, start.y + t * dy))
}
