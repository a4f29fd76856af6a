//! Backend-agnostic display list for the polygon canvas.
//!
//! The renderer collaborator walks a [`Scene`] in order (first = bottom layer)
//! and draws each element with whatever primitive library it uses. The scene
//! also tells it which handles and edges are interactive.

use super::color::{self, Color};
use super::polygon::{Point, Polygon, PolygonId};

/// Visual parameters for building a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    /// Stroke color for closed polygon outlines
    pub outline_color: Color,
    /// Stroke color for the in-progress dashed preview
    pub preview_color: Color,
    /// Fill color for vertex handles on closed polygons
    pub handle_color: Color,
    /// Fill color for vertex handles on the in-progress polygon
    pub preview_handle_color: Color,
    /// Stroke color around vertex handles
    pub handle_stroke_color: Color,
    /// Outline stroke width
    pub stroke_width: f64,
    /// Handle border width
    pub handle_stroke_width: f64,
    /// Vertex handle radius; also the vertex hit radius
    pub vertex_radius: f64,
    /// Width of the invisible stroke that makes edges clickable
    pub edge_hit_width: f64,
    /// Dash pattern (on, off) for the in-progress preview
    pub dash: [f64; 2],
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            outline_color: color::OUTLINE,
            preview_color: color::PREVIEW,
            handle_color: color::HANDLE,
            preview_handle_color: color::PREVIEW_HANDLE,
            handle_stroke_color: color::WHITE,
            stroke_width: 1.5,
            handle_stroke_width: 0.5,
            vertex_radius: 4.0,
            edge_hit_width: 20.0,
            dash: [4.0, 3.0],
        }
    }
}

/// A single drawable element.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneElement {
    /// Polyline or closed outline through a polygon's vertices
    Outline {
        /// Owning polygon, `None` for the in-progress polygon
        polygon: Option<PolygonId>,
        points: Vec<Point>,
        closed: bool,
        color: Color,
        width: f64,
        /// Dash pattern, `None` for a solid stroke
        dash: Option<[f64; 2]>,
    },
    /// Invisible, clickable stroke over one edge of a closed polygon
    EdgeHitLine {
        polygon: PolygonId,
        /// Index of the vertex the edge starts at
        after_point_index: usize,
        start: Point,
        end: Point,
        width: f64,
    },
    /// Round vertex handle
    VertexHandle {
        /// Owning polygon, `None` for the in-progress polygon
        polygon: Option<PolygonId>,
        point_index: usize,
        center: Point,
        radius: f64,
        fill: Color,
        stroke: Color,
        stroke_width: f64,
        /// Whether the handle may be dragged
        draggable: bool,
    },
}

/// Ordered list of elements describing the current canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub elements: Vec<SceneElement>,
}

impl Scene {
    /// Builds the scene for the given editor contents.
    ///
    /// Closed outlines are always drawn. Edge hit-lines, vertex handles, and
    /// the in-progress preview only appear while the editing tool is active.
    pub fn build(
        completed: &[Polygon],
        in_progress: &[Point],
        tool_active: bool,
        style: &SceneStyle,
    ) -> Self {
        let mut elements = Vec::new();

        for polygon in completed {
            if tool_active && polygon.is_closed {
                elements.extend(polygon.edges().map(|(after_point_index, start, end)| {
                    SceneElement::EdgeHitLine {
                        polygon: polygon.id,
                        after_point_index,
                        start,
                        end,
                        width: style.edge_hit_width,
                    }
                }));
            }

            elements.push(SceneElement::Outline {
                polygon: Some(polygon.id),
                points: polygon.points.clone(),
                closed: polygon.is_closed,
                color: style.outline_color,
                width: style.stroke_width,
                dash: None,
            });

            if tool_active && polygon.is_closed {
                elements.extend(polygon.points.iter().enumerate().map(|(point_index, p)| {
                    SceneElement::VertexHandle {
                        polygon: Some(polygon.id),
                        point_index,
                        center: *p,
                        radius: style.vertex_radius,
                        fill: style.handle_color,
                        stroke: style.handle_stroke_color,
                        stroke_width: style.handle_stroke_width,
                        draggable: true,
                    }
                }));
            }
        }

        if tool_active {
            if !in_progress.is_empty() {
                elements.push(SceneElement::Outline {
                    polygon: None,
                    points: in_progress.to_vec(),
                    closed: false,
                    color: style.preview_color,
                    width: style.stroke_width,
                    dash: Some(style.dash),
                });
            }
            elements.extend(in_progress.iter().enumerate().map(|(point_index, p)| {
                SceneElement::VertexHandle {
                    polygon: None,
                    point_index,
                    center: *p,
                    radius: style.vertex_radius,
                    fill: style.preview_handle_color,
                    stroke: style.handle_stroke_color,
                    stroke_width: style.handle_stroke_width,
                    draggable: true,
                }
            }));
        }

        Self { elements }
    }

    /// Number of vertex handles currently offered as drag targets.
    pub fn draggable_handle_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, SceneElement::VertexHandle { draggable: true, .. }))
            .count()
    }

    /// Number of edges currently offered as insertion targets.
    pub fn edge_target_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, SceneElement::EdgeHitLine { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Polygon {
        Polygon {
            id: PolygonId(3),
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
            ],
            is_closed: true,
        }
    }

    #[test]
    fn inactive_tool_offers_no_targets() {
        let scene = Scene::build(
            &[triangle()],
            &[Point::new(1.0, 1.0)],
            false,
            &SceneStyle::default(),
        );
        assert_eq!(scene.elements.len(), 1);
        assert_eq!(scene.draggable_handle_count(), 0);
        assert_eq!(scene.edge_target_count(), 0);
    }

    #[test]
    fn active_tool_offers_handles_and_edges() {
        let in_progress = [Point::new(50.0, 50.0), Point::new(60.0, 50.0)];
        let scene = Scene::build(&[triangle()], &in_progress, true, &SceneStyle::default());

        assert_eq!(scene.edge_target_count(), 3);
        assert_eq!(scene.draggable_handle_count(), 5);

        let preview = scene
            .elements
            .iter()
            .find(|e| matches!(e, SceneElement::Outline { polygon: None, .. }))
            .expect("preview outline");
        if let SceneElement::Outline { dash, closed, .. } = preview {
            assert_eq!(*dash, Some([4.0, 3.0]));
            assert!(!closed);
        }
    }

    #[test]
    fn handles_are_drawn_above_outline() {
        let scene = Scene::build(&[triangle()], &[], true, &SceneStyle::default());
        let outline_pos = scene
            .elements
            .iter()
            .position(|e| matches!(e, SceneElement::Outline { .. }))
            .unwrap();
        let first_handle = scene
            .elements
            .iter()
            .position(|e| matches!(e, SceneElement::VertexHandle { .. }))
            .unwrap();
        assert!(outline_pos < first_handle);
    }
}
