use crate::draw::Point;
use crate::editor::{EditOutcome, EditTarget};
use crate::input::events::{MouseButton, PointerEvent};
use crate::input::hit::{HitTarget, hit_test};
use crate::util::point_to_segment_distance;

use super::{DragState, InputState};

impl InputState {
    /// Dispatches a raw pointer event to the matching handler.
    pub fn on_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press { button, position } => self.on_mouse_press(button, position),
            PointerEvent::Motion { position } => self.on_mouse_motion(position),
            PointerEvent::Release { button, position } => self.on_mouse_release(button, position),
        }
    }

    /// Processes a mouse button press event.
    ///
    /// # Behavior
    /// - Left press on a vertex handle: starts dragging that vertex
    /// - Left press on a closed polygon's edge: arms a vertex insertion
    /// - Left press anywhere else: primary click (place a point or close)
    /// - Right press: cancels the current drag or pending insertion
    pub fn on_mouse_press(&mut self, button: MouseButton, position: Point) {
        match button {
            MouseButton::Left => {
                if !matches!(self.state, DragState::Idle) {
                    return;
                }

                // A closing click wins over any handle under it, including
                // the first vertex's own handle. Handles and edges are only
                // targets while the pen is active.
                let hit = if self.tool_active() && !self.editor.closes_at(position) {
                    hit_test(
                        self.editor.completed(),
                        self.editor.in_progress(),
                        position,
                        self.hit_slop(),
                    )
                } else {
                    None
                };

                match hit {
                    Some(HitTarget::Vertex {
                        target,
                        point_index,
                    }) => {
                        let Some(vertex) = self.vertex_position(target, point_index) else {
                            return;
                        };
                        self.state = DragState::DraggingVertex {
                            target,
                            point_index,
                            grab_offset: Point::new(vertex.x - position.x, vertex.y - position.y),
                        };
                        log::debug!("Drag start on vertex {point_index} of {target}");
                    }
                    Some(HitTarget::Edge {
                        polygon_index,
                        after_point_index,
                    }) => {
                        self.state = DragState::PendingInsert {
                            polygon_index,
                            after_point_index,
                        };
                    }
                    None => self.primary_click(position),
                }
            }
            MouseButton::Right => {
                if !matches!(self.state, DragState::Idle) {
                    self.state = DragState::Idle;
                    self.needs_redraw = true;
                }
            }
            MouseButton::Middle => {}
        }
    }

    /// Processes mouse motion events.
    ///
    /// While a vertex is being dragged it follows the pointer, keeping the
    /// offset between the pointer and the vertex from the initial press.
    pub fn on_mouse_motion(&mut self, position: Point) {
        if let DragState::DraggingVertex {
            target,
            point_index,
            grab_offset,
        } = self.state
        {
            let moved = Point::new(position.x + grab_offset.x, position.y + grab_offset.y);
            self.mark_target_dirty(target);
            let tool_active = self.tool_active();
            let result = self
                .editor
                .move_vertex(target, point_index, moved, tool_active);
            if self.note_edit(result).is_some() {
                self.mark_target_dirty(target);
            } else {
                // The vertex is gone (or the gate closed); stop tracking it.
                self.state = DragState::Idle;
            }
        }
    }

    /// Processes mouse button release events.
    ///
    /// Releasing over the edge that was pressed inserts a vertex at the release
    /// position; releasing anywhere else drops the insertion. Releasing a
    /// dragged vertex ends the drag.
    pub fn on_mouse_release(&mut self, button: MouseButton, position: Point) {
        if button != MouseButton::Left {
            return;
        }

        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::PendingInsert {
                polygon_index,
                after_point_index,
            } => {
                if !self.released_on_edge(polygon_index, after_point_index, position) {
                    log::debug!(
                        "Insertion on edge {after_point_index} of polygon {polygon_index} dropped"
                    );
                    self.needs_redraw = true;
                    return;
                }
                let target = EditTarget::Completed(polygon_index);
                let tool_active = self.tool_active();
                let result =
                    self.editor
                        .insert_vertex(polygon_index, after_point_index, position, tool_active);
                if self.note_edit(result).is_some() {
                    self.mark_target_dirty(target);
                }
            }
            DragState::DraggingVertex { point_index, target, .. } => {
                log::debug!("Drag end on vertex {point_index} of {target}");
            }
            DragState::Idle => {}
        }
    }

    /// Whether `position` is still within the hit stroke of the given edge.
    fn released_on_edge(
        &self,
        polygon_index: usize,
        after_point_index: usize,
        position: Point,
    ) -> bool {
        let Some(polygon) = self.editor.polygon(polygon_index) else {
            return false;
        };
        let half_width = self.style.edge_hit_width / 2.0;
        polygon
            .edges()
            .find(|(after, _, _)| *after == after_point_index)
            .is_some_and(|(_, start, end)| {
                point_to_segment_distance(position, start, end) <= half_width
            })
    }

    fn primary_click(&mut self, position: Point) {
        let tool_active = self.tool_active();
        let result = self.editor.handle_primary_click(position, tool_active);
        match self.note_edit(result) {
            Some(EditOutcome::Closed(_)) => {
                let index = self.editor.completed().len().saturating_sub(1);
                self.mark_target_dirty(EditTarget::Completed(index));
            }
            Some(_) => self.mark_target_dirty(EditTarget::InProgress),
            None => {}
        }
    }
}
