//! Configuration file support for polyscribe.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/polyscribe/config.toml`. Settings include the closure distance,
//! handle sizes, and the stroke/fill styling of the polygon scene.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{EditorConfig, HandleConfig, StyleConfig};

use crate::draw::{SceneStyle, color};
use crate::input::Tool;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [editor]
/// close_threshold = 15.0
/// default_tool = "pen"
///
/// [handles]
/// vertex_radius = 4.0
/// edge_hit_width = 20.0
///
/// [style]
/// outline_color = "#333333"
/// preview_color = [102, 102, 102]
/// dash = [4.0, 3.0]
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Polygon editing behavior
    #[serde(default)]
    pub editor: EditorConfig,

    /// Vertex handle and edge hit sizes
    #[serde(default)]
    pub handles: HandleConfig,

    /// Scene colors and strokes
    #[serde(default)]
    pub style: StyleConfig,
}

/// Clamps `value` into `min..=max`, logging when it was out of bounds.
fn clamp_logged(name: &str, value: &mut f64, min: f64, max: f64) {
    let current = *value;
    if !(min..=max).contains(&current) {
        warn!("Invalid {name} {current:.1}, clamping to {min:.1}-{max:.1} range");
        // NaN fails `contains` too; it falls back to the lower bound.
        *value = if current.is_nan() {
            min
        } else {
            current.clamp(min, max)
        };
    }
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged. Unresolvable colors are reset to their defaults.
    ///
    /// Validated ranges:
    /// - `editor.close_threshold`: 1.0 - 100.0
    /// - `handles.vertex_radius`: 1.0 - 20.0
    /// - `handles.edge_hit_width`: 2.0 - 60.0
    /// - `style.stroke_width`: 0.5 - 10.0
    /// - `style.handle_stroke_width`: 0.0 - 5.0
    /// - `style.dash`: 0.5 - 50.0 per entry
    pub fn validate_and_clamp(&mut self) {
        clamp_logged(
            "close_threshold",
            &mut self.editor.close_threshold,
            1.0,
            100.0,
        );
        clamp_logged("vertex_radius", &mut self.handles.vertex_radius, 1.0, 20.0);
        clamp_logged("edge_hit_width", &mut self.handles.edge_hit_width, 2.0, 60.0);
        clamp_logged("stroke_width", &mut self.style.stroke_width, 0.5, 10.0);
        clamp_logged(
            "handle_stroke_width",
            &mut self.style.handle_stroke_width,
            0.0,
            5.0,
        );
        for entry in &mut self.style.dash {
            clamp_logged("dash entry", entry, 0.5, 50.0);
        }

        let defaults = StyleConfig::default();
        let colors = [
            ("outline_color", &mut self.style.outline_color, defaults.outline_color),
            ("preview_color", &mut self.style.preview_color, defaults.preview_color),
            ("handle_color", &mut self.style.handle_color, defaults.handle_color),
            (
                "preview_handle_color",
                &mut self.style.preview_handle_color,
                defaults.preview_handle_color,
            ),
            (
                "handle_stroke_color",
                &mut self.style.handle_stroke_color,
                defaults.handle_stroke_color,
            ),
        ];
        for (name, spec, default) in colors {
            if !spec.is_valid() {
                warn!("Invalid {name} {spec:?}, falling back to default");
                *spec = default;
            }
        }
    }

    /// Replaces the closure distance, applying the same range as the file value.
    pub fn override_close_threshold(&mut self, value: f64) {
        self.editor.close_threshold = value;
        clamp_logged(
            "close_threshold",
            &mut self.editor.close_threshold,
            1.0,
            100.0,
        );
    }

    /// Tool selected at startup.
    pub fn initial_tool(&self) -> Tool {
        // Parsing a tool identifier cannot fail; unknown names become `Tool::Other`.
        self.editor.default_tool.parse().unwrap_or_default()
    }

    /// Resolves the configured styling into a renderer-ready [`SceneStyle`].
    pub fn scene_style(&self) -> SceneStyle {
        SceneStyle {
            outline_color: self.style.outline_color.to_color_or(color::OUTLINE),
            preview_color: self.style.preview_color.to_color_or(color::PREVIEW),
            handle_color: self.style.handle_color.to_color_or(color::HANDLE),
            preview_handle_color: self
                .style
                .preview_handle_color
                .to_color_or(color::PREVIEW_HANDLE),
            handle_stroke_color: self.style.handle_stroke_color.to_color_or(color::WHITE),
            stroke_width: self.style.stroke_width,
            handle_stroke_width: self.style.handle_stroke_width,
            vertex_radius: self.handles.vertex_radius,
            edge_hit_width: self.handles.edge_hit_width,
            dash: self.style.dash,
        }
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/polyscribe/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("polyscribe");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, or returns defaults if it is missing.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Color;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_canvas_palette() {
        let config = Config::default();
        assert_eq!(config.scene_style(), SceneStyle::default());
        assert_eq!(config.editor.close_threshold, 15.0);
        assert_eq!(config.initial_tool(), Tool::None);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config.handles.vertex_radius, 4.0);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[editor]\nclose_threshold = 25.0\ndefault_tool = \"pen\"\n\n[style]\npreview_color = [255, 0, 0]\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.editor.close_threshold, 25.0);
        assert_eq!(config.initial_tool(), Tool::Pen);
        assert_eq!(config.handles.edge_hit_width, 20.0);
        assert_eq!(
            config.scene_style().preview_color,
            Color::new(1.0, 0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.editor.close_threshold = 0.0;
        config.handles.vertex_radius = 500.0;
        config.style.dash = [0.0, f64::NAN];
        config.style.outline_color = ColorSpec::Name("not-a-color".into());

        config.validate_and_clamp();

        assert_eq!(config.editor.close_threshold, 1.0);
        assert_eq!(config.handles.vertex_radius, 20.0);
        assert_eq!(config.style.dash, [0.5, 0.5]);
        assert_eq!(config.style.outline_color, StyleConfig::default().outline_color);
    }

    #[test]
    fn close_threshold_override_is_clamped() {
        let mut config = Config::default();
        config.override_close_threshold(0.0001);
        assert_eq!(config.editor.close_threshold, 1.0);
        config.override_close_threshold(1e9);
        assert_eq!(config.editor.close_threshold, 100.0);
        config.override_close_threshold(f64::NAN);
        assert_eq!(config.editor.close_threshold, 1.0);
        config.override_close_threshold(30.0);
        assert_eq!(config.editor.close_threshold, 30.0);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[editor\nclose_threshold = ").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("close_threshold"));
        assert!(schema.contains("edge_hit_width"));
    }
}
