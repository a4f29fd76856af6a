//! Tool selection and the editing-tool gate.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Tool identifier selected by the toolbar.
///
/// Only [`Tool::Pen`] enables polygon editing. Every other value, including
/// the empty selection, closes the gate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Tool {
    /// No tool selected (empty identifier)
    #[default]
    None,
    /// Polygon pen: place, close, drag, and insert vertices
    Pen,
    /// Any other tool identifier; polygon editing is disabled
    Other(String),
}

impl Tool {
    /// Whether this tool opens the editing gate.
    pub fn is_editing(&self) -> bool {
        matches!(self, Tool::Pen)
    }

    /// Identifier string, the inverse of parsing.
    pub fn as_str(&self) -> &str {
        match self {
            Tool::None => "",
            Tool::Pen => "pen",
            Tool::Other(name) => name,
        }
    }
}

impl FromStr for Tool {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Ok(match name.to_ascii_lowercase().as_str() {
            "" | "none" => Tool::None,
            "pen" => Tool::Pen,
            _ => Tool::Other(name.to_string()),
        })
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::None => f.write_str("none"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Gate state change produced by a tool switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolTransition {
    /// The gate opened
    Activated,
    /// The gate closed; the owner must discard the in-progress polygon
    Deactivated,
    /// The gate kept its state (the tool identifier may still have changed)
    Unchanged,
}

/// Holds the active tool and reports gate transitions.
///
/// The gate is open exactly when the active tool is the pen. Transitions are
/// reported once per actual change, never on repeated sets of the same state.
#[derive(Debug, Clone, Default)]
pub struct ToolGate {
    active: Tool,
}

impl ToolGate {
    pub fn new(initial: Tool) -> Self {
        Self { active: initial }
    }

    pub fn active_tool(&self) -> &Tool {
        &self.active
    }

    /// Whether pointer input may reach the editor.
    pub fn is_open(&self) -> bool {
        self.active.is_editing()
    }

    /// Selects a tool, returning the resulting gate transition.
    pub fn set_tool(&mut self, tool: Tool) -> ToolTransition {
        let was_open = self.is_open();
        self.active = tool;
        match (was_open, self.is_open()) {
            (false, true) => ToolTransition::Activated,
            (true, false) => ToolTransition::Deactivated,
            _ => ToolTransition::Unchanged,
        }
    }

    /// Toolbar behavior: pen when anything else is selected, none when pen is.
    pub fn toggle_pen(&mut self) -> ToolTransition {
        let next = if self.is_open() { Tool::None } else { Tool::Pen };
        self.set_tool(next)
    }
}
