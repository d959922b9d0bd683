//! Camera system for 3D scene viewing.
//!
//! Provides the drag-to-orbit controller and a perspective camera with
//! view-projection math.

/// Drag-to-orbit controller and its gesture state machine.
pub mod controller;
/// Core camera struct and projection math.
pub mod core;

pub use controller::OrbitController;
pub use core::Camera;
