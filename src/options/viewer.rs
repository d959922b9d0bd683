use serde::{Deserialize, Serialize};

/// Demo viewer parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerOptions {
    /// Frame-rate cap for the demo loop (0 = unlimited).
    pub target_fps: u32,
    /// Window title prefix.
    pub title: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            target_fps: 60,
            title: "swivel".to_owned(),
        }
    }
}
