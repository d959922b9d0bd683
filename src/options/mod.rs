//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (orbit behavior, camera projection,
//! keybindings, viewer pacing) are consolidated here. Options serialize
//! to/from TOML; every struct uses `#[serde(default)]` so partial preset
//! files (e.g. only overriding `[orbit]`) work correctly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SwivelError;

/// Camera projection options.
pub mod camera;
/// Keybinding options.
pub mod keybindings;
/// Orbit behavior options.
pub mod orbit;
/// Demo viewer options.
pub mod viewer;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use orbit::OrbitOptions;
pub use viewer::ViewerOptions;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Orbit behavior.
    pub orbit: OrbitOptions,
    /// Camera projection.
    pub camera: CameraOptions,
    /// Viewer keybindings.
    pub keybindings: KeybindingOptions,
    /// Demo viewer pacing and window settings.
    pub viewer: ViewerOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults; the
    /// result is validated before being returned.
    ///
    /// # Errors
    ///
    /// [`SwivelError::Io`] when the file cannot be read,
    /// [`SwivelError::OptionsParse`] on malformed TOML or out-of-range
    /// values.
    pub fn load(path: &Path) -> Result<Self, SwivelError> {
        let content = std::fs::read_to_string(path)?;
        let mut options: Self = toml::from_str(&content).map_err(|e| {
            SwivelError::OptionsParse(format!(
                "failed to parse {}: {e}",
                path.display()
            ))
        })?;
        options.keybindings.rebuild_reverse_map();
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed), creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// [`SwivelError::OptionsParse`] on serialization failure,
    /// [`SwivelError::Io`] on filesystem failure.
    pub fn save(&self, path: &Path) -> Result<(), SwivelError> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            SwivelError::OptionsParse(format!(
                "failed to serialize options: {e}"
            ))
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
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

    /// Check value ranges the orbit math depends on.
    ///
    /// # Errors
    ///
    /// [`SwivelError::OptionsParse`] naming the offending field.
    pub fn validate(&self) -> Result<(), SwivelError> {
        let orbit = &self.orbit;
        if !(orbit.distance_to_target > 0.0) {
            return Err(SwivelError::OptionsParse(format!(
                "orbit.distance_to_target must be positive, got {}",
                orbit.distance_to_target
            )));
        }
        if !(0.0..=360.0).contains(&orbit.max_degrees_per_full_swipe) {
            return Err(SwivelError::OptionsParse(format!(
                "orbit.max_degrees_per_full_swipe must be in [0, 360], got {}",
                orbit.max_degrees_per_full_swipe
            )));
        }
        if !(orbit.min_distance > 0.0) || orbit.min_distance > orbit.max_distance
        {
            return Err(SwivelError::OptionsParse(format!(
                "orbit zoom bounds are invalid: min {} max {}",
                orbit.min_distance, orbit.max_distance
            )));
        }
        Ok(())
    }
}
