//! Interaction-target hit testing for pointer presses.

use crate::draw::{Point, Polygon, distance};
use crate::editor::EditTarget;
use crate::util::point_to_segment_distance;

/// Something under the pointer that reacts to a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A draggable vertex handle
    Vertex {
        target: EditTarget,
        point_index: usize,
    },
    /// An edge of a closed polygon, accepting vertex insertion
    Edge {
        polygon_index: usize,
        after_point_index: usize,
    },
}

/// Hit-test sizes, matching what the renderer draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitSlop {
    /// Radius of a vertex handle
    pub vertex_radius: f64,
    /// Full width of an edge's clickable stroke
    pub edge_hit_width: f64,
}

/// Finds the top-most interactive element under `position`.
///
/// Walks elements in reverse paint order: in-progress handles are drawn last
/// and win first, then each closed polygon from newest to oldest, handles
/// before edges. Returns `None` when the press lands on empty canvas (or on a
/// polygon body), which the caller treats as a plain canvas click.
pub fn hit_test(
    completed: &[Polygon],
    in_progress: &[Point],
    position: Point,
    slop: HitSlop,
) -> Option<HitTarget> {
    if let Some(point_index) = vertex_under(in_progress, position, slop.vertex_radius) {
        return Some(HitTarget::Vertex {
            target: EditTarget::InProgress,
            point_index,
        });
    }

    let edge_tolerance = slop.edge_hit_width / 2.0;
    for (polygon_index, polygon) in completed.iter().enumerate().rev() {
        if !polygon.is_closed {
            continue;
        }
        if let Some(point_index) = vertex_under(&polygon.points, position, slop.vertex_radius) {
            return Some(HitTarget::Vertex {
                target: EditTarget::Completed(polygon_index),
                point_index,
            });
        }

        let nearest_edge = polygon
            .edges()
            .map(|(after, start, end)| (after, point_to_segment_distance(position, start, end)))
            .filter(|(_, d)| *d <= edge_tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((after_point_index, _)) = nearest_edge {
            return Some(HitTarget::Edge {
                polygon_index,
                after_point_index,
            });
        }
    }

    None
}

/// Index of the top-most vertex whose handle covers `position`.
fn vertex_under(points: &[Point], position: Point, radius: f64) -> Option<usize> {
    points
        .iter()
        .rposition(|p| distance(*p, position) <= radius)
}
