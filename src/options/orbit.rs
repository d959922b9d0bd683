use serde::{Deserialize, Serialize};

/// Orbit behavior parameters.
///
/// `distance_to_target` and `max_degrees_per_full_swipe` are the core
/// orbit configuration, read by the controller on every drag tick. The
/// zoom fields are consumed by the rig only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitOptions {
    /// Radius of the orbit sphere: the camera sits exactly this far from
    /// the target. Must be positive.
    pub distance_to_target: f32,
    /// Degrees of rotation produced by dragging across one full viewport
    /// along one axis. Must be in [0, 360].
    pub max_degrees_per_full_swipe: f32,
    /// Zoom sensitivity multiplier for scroll input.
    pub zoom_speed: f32,
    /// Closest the zoom may bring the camera to the target.
    pub min_distance: f32,
    /// Farthest the zoom may take the camera from the target.
    pub max_distance: f32,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            distance_to_target: 10.0,
            max_degrees_per_full_swipe: 180.0,
            zoom_speed: 0.1,
            min_distance: 1.0,
            max_distance: 500.0,
        }
    }
}
