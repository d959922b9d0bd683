//! Platform-agnostic input events and per-tick drag sampling.
//!
//! The windowing layer forwards events as [`InputEvent`]s; an
//! [`InputProcessor`] folds them into transient state and hands out one
//! [`DragSample`] per tick.

/// Platform-agnostic input event types.
pub mod event;
/// Event-to-sample folding.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{DragPhase, DragSample, InputProcessor};
