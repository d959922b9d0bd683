//! Small shared utilities.

/// Frame pacing and FPS measurement.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
