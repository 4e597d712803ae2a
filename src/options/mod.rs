//! Centralized camera/input options with TOML preset support.
//!
//! All tweakable settings (movement speed, sensitivity, field of view,
//! keybindings) are consolidated here. Options serialize to/from TOML so
//! applications can ship editable presets.

mod camera;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FreelookError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera movement, look, and zoom parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FreelookError> {
        let content = std::fs::read_to_string(path).map_err(FreelookError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| FreelookError::OptionsParse(e.to_string()))?;
        // The reverse lookup cache is serde(skip); rebuild it here.
        options.keybindings.rebuild_reverse_map();
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FreelookError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FreelookError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FreelookError::Io)?;
        }
        std::fs::write(path, content).map_err(FreelookError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::MovementDirection;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let mut parsed: Options = toml::from_str(&toml_str).unwrap();
        parsed.keybindings.rebuild_reverse_map();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
movement_speed = 5.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.movement_speed, 5.0);
        // Everything else should be default
        assert_eq!(opts.camera.mouse_sensitivity, 0.1);
        assert_eq!(opts.camera.field_of_view, 45.0);
        assert!(opts.camera.constrain_pitch);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(MovementDirection::Forward)
        );
        assert_eq!(
            opts.keybindings.lookup("KeyA"),
            Some(MovementDirection::StrafeLeft)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn rebound_keys_survive_a_toml_round_trip() {
        let toml_str = r#"
[keybindings.bindings]
forward = "ArrowUp"
backward = "ArrowDown"
"#;
        let mut opts: Options = toml::from_str(toml_str).unwrap();
        opts.keybindings.rebuild_reverse_map();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(MovementDirection::Forward)
        );
        // Unbound defaults are replaced wholesale by the partial map.
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("camera"));
        // Skipped sections should be absent
        assert!(!props.contains_key("keybindings"));

        // Camera should have exposed fields but not skipped ones
        let camera = &props["camera"]["properties"];
        assert!(camera.get("movement_speed").is_some());
        assert!(camera.get("field_of_view").is_some());
        assert!(camera.get("yaw").is_none());
        assert!(camera.get("constrain_pitch").is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = std::env::temp_dir().join("freelook-options-test");
        let path = dir.join("preset.toml");

        let mut opts = Options::default();
        opts.camera.movement_speed = 7.5;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded.camera.movement_speed, 7.5);
        assert_eq!(
            loaded.keybindings.lookup("KeyD"),
            Some(MovementDirection::StrafeRight)
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
