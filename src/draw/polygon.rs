//! Point and polygon definitions for the authoring canvas.

use crate::util::Rect;

/// A position in canvas space.
///
/// Coordinates are real-valued; the pointer collaborator is responsible for
/// mapping device/window coordinates into this space before handing them over.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        distance(self, other)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Stable identifier handed out to a polygon when it is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolygonId(pub u64);

impl std::fmt::Display for PolygonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A finished polygon.
///
/// Points are stored in drawing order, which is also rendering order. A closed
/// polygon always has at least three points; the engine is the only producer
/// of closed polygons and enforces that on closure.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Identifier assigned at closure time
    pub id: PolygonId,
    /// Vertices in drawing order
    pub points: Vec<Point>,
    /// Whether the outline connects the last vertex back to the first
    pub is_closed: bool,
}

impl PartialEq for Polygon {
    /// Compares geometry only; identifiers are a rendering concern.
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points && self.is_closed == other.is_closed
    }
}

impl Polygon {
    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates the edges as `(after_point_index, start, end)`.
    ///
    /// The implicit closing edge (last vertex back to the first) is included
    /// when the polygon is closed. Inserting after `after_point_index` places
    /// the new vertex on that edge.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Point, Point)> + '_ {
        edges_of(&self.points, self.is_closed)
    }
}

/// Iterates consecutive segments of a point sequence, optionally closing it.
pub fn edges_of(
    points: &[Point],
    closed: bool,
) -> impl Iterator<Item = (usize, Point, Point)> + '_ {
    let n = points.len();
    let count = match n {
        0 | 1 => 0,
        2 => 1,
        _ if closed => n,
        _ => n - 1,
    };
    (0..count).map(move |i| (i, points[i], points[(i + 1) % n]))
}

/// Bounding box for a set of points, expanded on every side by `margin`.
///
/// Fractional coordinates are rounded outward so the rectangle always covers
/// the full extent. Bounds are clamped to half the `i32` range on each side so
/// the width and height always fit. Returns `None` for an empty slice.
pub fn bounding_box_for_points(points: &[Point], margin: f64) -> Option<Rect> {
    let first = points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let margin = margin.max(1.0);
    let to_pixel = |value: f64| value.clamp(-COORD_LIMIT, COORD_LIMIT) as i32;
    Rect::from_min_max(
        to_pixel((min_x - margin).floor()),
        to_pixel((min_y - margin).floor()),
        to_pixel((max_x + margin).ceil()),
        to_pixel((max_y + margin).ceil()),
    )
}

const COORD_LIMIT: f64 = (i32::MAX / 2) as f64;
