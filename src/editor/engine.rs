//! Editor state and the operations that mutate it.

use super::EditError;
use crate::draw::{Point, Polygon, PolygonId, distance};
use log::{debug, info};

/// Distance (canvas units) within which a click on the first vertex closes
/// the in-progress polygon.
pub const DEFAULT_CLOSE_THRESHOLD: f64 = 15.0;

/// Identifies which polygon a vertex operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditTarget {
    /// A completed polygon, by position in the completed list
    Completed(usize),
    /// The polygon currently being drawn
    InProgress,
}

impl std::fmt::Display for EditTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed(index) => write!(f, "polygon {index}"),
            Self::InProgress => f.write_str("in-progress polygon"),
        }
    }
}

/// Result of a successful edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// A point was appended to the in-progress polygon
    PointAdded,
    /// The in-progress polygon was closed and moved to the completed list
    Closed(PolygonId),
    /// A vertex was inserted into an edge of a completed polygon
    VertexInserted,
    /// A vertex was relocated
    VertexMoved,
    /// The in-progress polygon was discarded (number of points dropped)
    Discarded(usize),
}

/// Polygon editing engine.
///
/// Holds every completed (closed) polygon plus the open point sequence being
/// drawn. The in-progress sequence is not a polygon yet: it only joins the
/// completed list on closure, and it is dropped wholesale when the editing
/// tool is deactivated.
#[derive(Debug)]
pub struct PolygonEditor {
    completed: Vec<Polygon>,
    in_progress: Vec<Point>,
    close_threshold: f64,
    next_id: u64,
}

impl Default for PolygonEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl PolygonEditor {
    /// Creates an empty editor using [`DEFAULT_CLOSE_THRESHOLD`].
    pub fn new() -> Self {
        Self::with_close_threshold(DEFAULT_CLOSE_THRESHOLD)
    }

    /// Creates an empty editor with a custom closure distance.
    pub fn with_close_threshold(close_threshold: f64) -> Self {
        Self {
            completed: Vec::new(),
            in_progress: Vec::new(),
            close_threshold,
            next_id: 0,
        }
    }

    pub fn close_threshold(&self) -> f64 {
        self.close_threshold
    }

    /// Completed polygons in creation order.
    pub fn completed(&self) -> &[Polygon] {
        &self.completed
    }

    /// Points of the polygon being drawn (empty when nothing is in progress).
    pub fn in_progress(&self) -> &[Point] {
        &self.in_progress
    }

    /// Looks up a completed polygon.
    pub fn polygon(&self, index: usize) -> Option<&Polygon> {
        self.completed.get(index)
    }

    /// Points of the given target, if it exists.
    pub fn points(&self, target: EditTarget) -> Option<&[Point]> {
        match target {
            EditTarget::Completed(index) => self.completed.get(index).map(|p| p.points.as_slice()),
            EditTarget::InProgress => Some(&self.in_progress),
        }
    }

    /// Handles a primary click on the canvas.
    ///
    /// Closes the in-progress polygon when it already holds more than two
    /// points and `position` lies strictly within the close threshold of its
    /// first point. Any other click appends `position` to the in-progress
    /// polygon. Proximity to vertices other than the first never closes.
    pub fn handle_primary_click(
        &mut self,
        position: Point,
        tool_active: bool,
    ) -> Result<EditOutcome, EditError> {
        if !tool_active {
            return Err(EditError::ToolInactive);
        }

        if self.closes_at(position) {
            let id = PolygonId(self.next_id);
            self.next_id += 1;
            let points = std::mem::take(&mut self.in_progress);
            info!("Closed polygon {id} with {} points", points.len());
            self.completed.push(Polygon {
                id,
                points,
                is_closed: true,
            });
            return Ok(EditOutcome::Closed(id));
        }

        self.in_progress.push(position);
        debug!(
            "Added point ({:.1}, {:.1}); in-progress polygon has {} points",
            position.x,
            position.y,
            self.in_progress.len()
        );
        Ok(EditOutcome::PointAdded)
    }

    /// Returns true if a click at `position` would close the in-progress polygon.
    pub fn closes_at(&self, position: Point) -> bool {
        self.in_progress.len() > 2
            && distance(position, self.in_progress[0]) < self.close_threshold
    }

    /// Inserts `position` into a completed polygon right after `after_point_index`.
    ///
    /// `after_point_index` names the edge that starts at that vertex; using the
    /// last index inserts on the closing edge, i.e. the point is appended.
    pub fn insert_vertex(
        &mut self,
        polygon_index: usize,
        after_point_index: usize,
        position: Point,
        tool_active: bool,
    ) -> Result<EditOutcome, EditError> {
        if !tool_active {
            return Err(EditError::ToolInactive);
        }

        let target = EditTarget::Completed(polygon_index);
        let polygon = self
            .completed
            .get_mut(polygon_index)
            .ok_or(EditError::InvalidPolygon { target })?;

        let len = polygon.points.len();
        if after_point_index >= len {
            return Err(EditError::InvalidPoint {
                target,
                point_index: after_point_index,
                len,
            });
        }

        polygon.points.insert(after_point_index + 1, position);
        debug!(
            "Inserted vertex into polygon {} after point {after_point_index}",
            polygon.id
        );
        Ok(EditOutcome::VertexInserted)
    }

    /// Replaces the vertex at `point_index` of `target` with `position`.
    ///
    /// Moving a vertex never triggers closure, even when it lands on the first
    /// vertex of the in-progress polygon.
    pub fn move_vertex(
        &mut self,
        target: EditTarget,
        point_index: usize,
        position: Point,
        tool_active: bool,
    ) -> Result<EditOutcome, EditError> {
        if !tool_active {
            return Err(EditError::ToolInactive);
        }

        let points = match target {
            EditTarget::Completed(index) => {
                &mut self
                    .completed
                    .get_mut(index)
                    .ok_or(EditError::InvalidPolygon { target })?
                    .points
            }
            EditTarget::InProgress => &mut self.in_progress,
        };

        let len = points.len();
        let slot = points.get_mut(point_index).ok_or(EditError::InvalidPoint {
            target,
            point_index,
            len,
        })?;
        *slot = position;
        Ok(EditOutcome::VertexMoved)
    }

    /// Discards the in-progress polygon. Completed polygons are untouched.
    ///
    /// Called once per transition of the editing tool from active to inactive.
    /// Calling it again with nothing in progress is harmless.
    pub fn on_tool_deactivated(&mut self) -> EditOutcome {
        let dropped = self.in_progress.len();
        self.in_progress.clear();
        if dropped > 0 {
            info!("Discarded in-progress polygon with {dropped} points");
        }
        EditOutcome::Discarded(dropped)
    }
}
