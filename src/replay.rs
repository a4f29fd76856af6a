//! Headless replay of pointer and tool events.
//!
//! An event script is a TOML file of `[[event]]` tables processed strictly in
//! order against an [`InputState`]. It exists so the editing rules can be
//! exercised without a windowing backend; it never stores polygons.
//!
//! ```toml
//! [[event]]
//! kind = "tool"
//! name = "pen"
//!
//! [[event]]
//! kind = "click"
//! x = 10.0
//! y = 20.0
//!
//! [[event]]
//! kind = "press"
//! x = 10.0
//! y = 20.0
//! button = "left"
//! ```

use crate::draw::Point;
use crate::input::{InputState, MouseButton, PointerEvent, Tool};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading an event script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read event script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid event script {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// One scripted input event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ScriptEvent {
    /// Select a tool by identifier
    Tool { name: String },
    /// Toolbar pen button
    TogglePen,
    /// Button press
    Press {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    /// Pointer motion
    Motion { x: f64, y: f64 },
    /// Button release
    Release {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    /// Left press and release at the same spot
    Click { x: f64, y: f64 },
}

/// Ordered list of scripted events.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(rename = "event", default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Parses a script from TOML text.
    pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source).map_err(|source| ScriptError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Feeds every event to `state` in order.
    pub fn run(&self, state: &mut InputState) {
        for (index, event) in self.events.iter().enumerate() {
            log::debug!("Replaying event {index}: {event:?}");
            apply_event(state, event);
        }
        log::info!("Replayed {} events", self.events.len());
    }
}

fn apply_event(state: &mut InputState, event: &ScriptEvent) {
    match event {
        ScriptEvent::Tool { name } => {
            // Tool identifiers always parse; unknown names select `Tool::Other`.
            state.set_tool(name.parse().unwrap_or_default());
        }
        ScriptEvent::TogglePen => state.toggle_pen(),
        ScriptEvent::Press { x, y, button } => state.on_pointer_event(PointerEvent::Press {
            button: *button,
            position: Point::new(*x, *y),
        }),
        ScriptEvent::Motion { x, y } => state.on_pointer_event(PointerEvent::Motion {
            position: Point::new(*x, *y),
        }),
        ScriptEvent::Release { x, y, button } => state.on_pointer_event(PointerEvent::Release {
            button: *button,
            position: Point::new(*x, *y),
        }),
        ScriptEvent::Click { x, y } => {
            let position = Point::new(*x, *y);
            state.on_mouse_press(MouseButton::Left, position);
            state.on_mouse_release(MouseButton::Left, position);
        }
    }
}

/// Human-readable snapshot of the editor after a replay.
pub struct Summary<'a> {
    state: &'a InputState,
}

impl<'a> Summary<'a> {
    pub fn new(state: &'a InputState) -> Self {
        Self { state }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let editor = self.state.editor();
        writeln!(f, "tool: {}", self.state.active_tool())?;
        writeln!(f, "completed polygons: {}", editor.completed().len())?;
        for polygon in editor.completed() {
            let points: Vec<String> = polygon
                .points
                .iter()
                .map(|p| format!("({}, {})", p.x, p.y))
                .collect();
            writeln!(
                f,
                "  polygon {}: {} points{} {}",
                polygon.id,
                polygon.len(),
                if polygon.is_closed { " closed" } else { "" },
                points.join(" ")
            )?;
        }
        write!(f, "in-progress points: {}", editor.in_progress().len())
    }
}

/// Builds an input state for replay, honoring an explicit tool override.
pub fn replay_state(config: &crate::Config, tool: Option<Tool>) -> InputState {
    InputState::new(
        config.editor.close_threshold,
        config.scene_style(),
        tool.unwrap_or_else(|| config.initial_tool()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use tempfile::TempDir;

    const SCENARIO_A: &str = r#"
[[event]]
kind = "tool"
name = "pen"

[[event]]
kind = "click"
x = 0.0
y = 0.0

[[event]]
kind = "click"
x = 10.0
y = 0.0

[[event]]
kind = "click"
x = 10.0
y = 10.0

[[event]]
kind = "click"
x = 2.0
y = 2.0
"#;

    #[test]
    fn parses_all_event_kinds() {
        let script = Script::parse(
            r#"
[[event]]
kind = "toggle-pen"

[[event]]
kind = "press"
x = 1.0
y = 2.0

[[event]]
kind = "motion"
x = 3.0
y = 4.0

[[event]]
kind = "release"
x = 3.0
y = 4.0
button = "right"
"#,
        )
        .unwrap();

        assert_eq!(
            script.events,
            vec![
                ScriptEvent::TogglePen,
                ScriptEvent::Press {
                    x: 1.0,
                    y: 2.0,
                    button: MouseButton::Left
                },
                ScriptEvent::Motion { x: 3.0, y: 4.0 },
                ScriptEvent::Release {
                    x: 3.0,
                    y: 4.0,
                    button: MouseButton::Right
                },
            ]
        );
    }

    #[test]
    fn empty_script_has_no_events() {
        assert!(Script::parse("").unwrap().events.is_empty());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(Script::parse("[[event]]\nkind = \"teleport\"\n").is_err());
    }

    #[test]
    fn scenario_a_closes_triangle() {
        let script = Script::parse(SCENARIO_A).unwrap();
        let mut state = replay_state(&Config::default(), None);
        script.run(&mut state);

        assert_eq!(state.editor().completed().len(), 1);
        assert_eq!(state.editor().completed()[0].len(), 3);
        assert!(state.editor().in_progress().is_empty());

        let summary = Summary::new(&state).to_string();
        assert!(summary.contains("completed polygons: 1"));
        assert!(summary.contains("polygon #0: 3 points closed"));
        assert!(summary.ends_with("in-progress points: 0"));
    }

    #[test]
    fn tool_override_beats_config() {
        let mut config = Config::default();
        config.override_close_threshold(30.0);
        let state = replay_state(&config, Some(Tool::Pen));
        assert!(state.tool_active());
        assert_eq!(state.editor().close_threshold(), 30.0);
    }

    #[test]
    fn load_reports_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Script::load(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ScriptError::Read { .. }));
    }
}
