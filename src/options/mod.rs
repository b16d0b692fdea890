//! Centralized session options with TOML preset support.
//!
//! All tweakable settings (node source, camera, picking, motion, labels,
//! colors, viewport layout) are consolidated here. Options serialize to/from
//! TOML so a session can be configured from a preset file.

mod camera;
mod colors;
mod display;
mod labels;
mod motion;
mod picking;
mod source;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::{hex_rgb, ColorOptions};
pub use display::{DisplayOptions, NodeStyle, ViewportLayout};
pub use labels::LabelOptions;
pub use motion::MotionOptions;
pub use picking::PickingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use source::SourceOptions;

use crate::error::CloudError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[motion]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Node feed location and coordinate derivation.
    #[schemars(skip)]
    pub source: SourceOptions,
    /// Camera projection and orbit parameters.
    pub camera: CameraOptions,
    /// Ray picking and click detection.
    pub picking: PickingOptions,
    /// Per-tick node wander.
    pub motion: MotionOptions,
    /// Label text and placement.
    pub labels: LabelOptions,
    /// Color palette.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Viewport layout and node styles.
    pub display: DisplayOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::Io`] if the file cannot be read and
    /// [`CloudError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, CloudError> {
        let content = std::fs::read_to_string(path).map_err(CloudError::Io)?;
        toml::from_str(&content)
            .map_err(|e| CloudError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::OptionsParse`] if serialization fails and
    /// [`CloudError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), CloudError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CloudError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CloudError::Io)?;
        }
        std::fs::write(path, content).map_err(CloudError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::VisualState;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[motion]
amplitude = 0.05
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.motion.amplitude, 0.05);
        assert!(opts.motion.enabled);
        assert_eq!(opts.picking.node_radius, 0.1);
        assert_eq!(opts.display.layout, ViewportLayout::Single);
        assert_eq!(opts.source.x_range, [-5.0, 5.0]);
    }

    #[test]
    fn layout_parses_snake_case() {
        let toml_str = r#"
[display]
layout = "side_by_side"
secondary_style = "textured"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.display.layout, ViewportLayout::SideBySide);
        assert_eq!(opts.display.style_for(0), NodeStyle::Sphere);
        assert_eq!(opts.display.style_for(1), NodeStyle::Textured);
    }

    #[test]
    fn state_colors_match_palette() {
        let colors = ColorOptions::default();
        assert_eq!(colors.for_state(VisualState::Default), hex_rgb(0x80_80_80));
        assert_eq!(colors.for_state(VisualState::Hovered), [0.0, 1.0, 0.0]);
        assert_eq!(colors.for_state(VisualState::Selected), [1.0, 0.0, 0.0]);
        assert_eq!(
            colors.for_state(VisualState::HoveredSelected),
            [1.0, 1.0, 0.0]
        );
    }

    #[test]
    fn label_text_uses_prefix() {
        let labels = LabelOptions::default();
        assert_eq!(labels.text_for("a"), "node_id a");
    }

    #[test]
    fn save_then_load_and_list() {
        let dir = std::env::temp_dir()
            .join(format!("notecloud-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.fovy = 60.0;
        opts.save(&dir.join("narrow.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("narrow.toml")).unwrap();
        assert_eq!(loaded.camera.fovy, 60.0);
        assert_eq!(Options::list_presets(&dir), vec!["narrow".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("notecloud-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[camera]\nfovy = \"wide\"\n").unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, CloudError::OptionsParse(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("picking"));
        assert!(props.contains_key("motion"));
        assert!(props.contains_key("labels"));
        assert!(props.contains_key("display"));

        assert!(!props.contains_key("source"));
        assert!(!props.contains_key("colors"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("eye").is_none());
    }
}
