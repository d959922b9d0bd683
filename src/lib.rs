//! Drag-to-orbit camera controller for interactive 3D viewers.
//!
//! Swivel keeps a camera on a sphere around a fixed target point: pointer
//! drags rotate the camera about the target while it stays at a constant
//! distance and keeps facing it. The crate produces camera poses and
//! view-projection matrices; rendering is left to the consumer.
//!
//! # Key entry points
//!
//! - [`rig::OrbitRig`] - composition root wiring input, orbit math, and
//!   the camera; feed it [`input::InputEvent`]s and call
//!   [`tick`](rig::OrbitRig::tick) once per frame
//! - [`camera::OrbitController`] - the orbit calculation itself, usable
//!   standalone against any scene graph
//! - [`options::Options`] - runtime configuration with TOML preset
//!   support
//!
//! # Architecture
//!
//! Everything is single-threaded and tick-driven. Window events are folded
//! into an [`input::InputProcessor`] as they arrive; once per rendered
//! frame the rig samples it, advances the drag state machine, and
//! recomputes the camera pose. Only the tick path mutates the camera, so
//! the pose is frozen whenever no drag is active.
//!
//! The optional `viewer` feature adds a winit demo application that
//! exercises the rig end to end.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod rig;
pub mod transform;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
