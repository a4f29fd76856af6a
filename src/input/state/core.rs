//! Pointer-input state and tool switching.

use crate::draw::{DirtyTracker, Point, Scene, SceneStyle};
use crate::editor::{EditError, EditOutcome, EditTarget, PolygonEditor};
use crate::input::hit::HitSlop;
use crate::input::tool::{Tool, ToolGate, ToolTransition};
use crate::util::Rect;

/// Pointer gesture currently in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No button held over an interactive element
    Idle,
    /// A vertex handle is being dragged
    DraggingVertex {
        target: EditTarget,
        point_index: usize,
        /// Vertex position minus press position, kept for the whole drag
        grab_offset: Point,
    },
    /// An edge was pressed; the vertex is inserted where the button is released
    PendingInsert {
        polygon_index: usize,
        after_point_index: usize,
    },
}

/// Owns the editor and the tool gate, and turns pointer events into edits.
///
/// This is the only writer of the editor: every mutation goes through one of
/// the engine operations with the gate state passed explicitly.
pub struct InputState {
    /// Polygon editing engine
    pub(crate) editor: PolygonEditor,
    /// Active tool and gate
    pub(crate) gate: ToolGate,
    /// Current gesture
    pub state: DragState,
    /// Visual parameters, also used for hit testing
    pub style: SceneStyle,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Canvas width in pixels (set by the host after layout)
    pub screen_width: u32,
    /// Canvas height in pixels (set by the host after layout)
    pub screen_height: u32,
    /// Tracks dirty regions between renders
    pub(crate) dirty_tracker: DirtyTracker,
}

impl InputState {
    /// Creates an input state with an empty editor.
    ///
    /// # Arguments
    /// * `close_threshold` - Distance to the first vertex that closes a polygon
    /// * `style` - Scene style; handle radius and edge width drive hit testing
    /// * `initial_tool` - Tool selected at startup
    pub fn new(close_threshold: f64, style: SceneStyle, initial_tool: Tool) -> Self {
        Self {
            editor: PolygonEditor::with_close_threshold(close_threshold),
            gate: ToolGate::new(initial_tool),
            state: DragState::Idle,
            style,
            needs_redraw: true,
            screen_width: 0,
            screen_height: 0,
            dirty_tracker: DirtyTracker::new(),
        }
    }

    /// Read access to the editor state for rendering and inspection.
    pub fn editor(&self) -> &PolygonEditor {
        &self.editor
    }

    pub fn active_tool(&self) -> &Tool {
        self.gate.active_tool()
    }

    /// Whether the editing tool is active (pointer input accepted).
    pub fn tool_active(&self) -> bool {
        self.gate.is_open()
    }

    /// Selects a tool.
    ///
    /// Leaving the pen discards the in-progress polygon exactly once and
    /// abandons any gesture in flight.
    pub fn set_tool(&mut self, tool: Tool) {
        let name = tool.to_string();
        let transition = self.gate.set_tool(tool);
        self.apply_transition(transition);
        log::info!("Active tool: {name}");
    }

    /// Toggles between the pen and no tool, like the toolbar button.
    pub fn toggle_pen(&mut self) {
        let transition = self.gate.toggle_pen();
        self.apply_transition(transition);
        log::info!("Active tool: {}", self.gate.active_tool());
    }

    fn apply_transition(&mut self, transition: ToolTransition) {
        match transition {
            ToolTransition::Deactivated => {
                self.state = DragState::Idle;
                self.editor.on_tool_deactivated();
            }
            ToolTransition::Activated => {}
            ToolTransition::Unchanged => return,
        }
        // Handles and the preview appear or vanish everywhere.
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
    }

    /// Builds the display list for the current state.
    pub fn scene(&self) -> Scene {
        Scene::build(
            self.editor.completed(),
            self.editor.in_progress(),
            self.tool_active(),
            &self.style,
        )
    }

    /// Updates canvas dimensions after host layout.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    /// Drains pending dirty rectangles for the current canvas size.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        let width = self.screen_width.min(i32::MAX as u32) as i32;
        let height = self.screen_height.min(i32::MAX as u32) as i32;
        self.dirty_tracker.take_regions(width, height)
    }

    pub(super) fn hit_slop(&self) -> HitSlop {
        HitSlop {
            vertex_radius: self.style.vertex_radius,
            edge_hit_width: self.style.edge_hit_width,
        }
    }

    /// Padding that covers handles and strokes around a vertex run.
    fn damage_margin(&self) -> f64 {
        self.style.vertex_radius + self.style.handle_stroke_width + self.style.stroke_width
    }

    /// Marks the current extent of `target` dirty.
    pub(super) fn mark_target_dirty(&mut self, target: EditTarget) {
        let margin = self.damage_margin();
        if let Some(points) = self.editor.points(target) {
            self.dirty_tracker.mark_points(points, margin);
        }
    }

    /// Records the result of an engine call.
    ///
    /// Rejections are expected on the interactive path (stale targets, gate
    /// closed) and only logged; the editor state is unchanged in that case.
    pub(super) fn note_edit(
        &mut self,
        result: Result<EditOutcome, EditError>,
    ) -> Option<EditOutcome> {
        match result {
            Ok(outcome) => {
                self.needs_redraw = true;
                Some(outcome)
            }
            Err(err) => {
                log::debug!("Ignored edit: {err}");
                None
            }
        }
    }

    /// Canvas-space position of a vertex, if it exists.
    pub(super) fn vertex_position(&self, target: EditTarget, point_index: usize) -> Option<Point> {
        self.editor
            .points(target)
            .and_then(|points| points.get(point_index))
            .copied()
    }
}
