//! Composition root wiring input, orbit math, and the camera.
//!
//! `OrbitRig` is what a host embeds: forward window events at any time,
//! call [`tick`](OrbitRig::tick) once per rendered frame, and read the
//! [`Camera`] back. Everything is single-threaded; only the tick path
//! mutates the camera, so the pose is frozen while no drag is active.

use glam::Vec3;

use crate::camera::{Camera, OrbitController};
use crate::error::SwivelError;
use crate::input::{DragPhase, InputEvent, InputProcessor};
use crate::options::Options;

/// Owns one camera, one orbit controller, and one input processor, and
/// drives the drag state machine.
///
/// The rig always sequences a drag-start before any drag-continue, so
/// the [`SwivelError::DragNotStarted`] contract violation cannot occur
/// through it; only direct [`OrbitController`] use can trip it.
#[derive(Debug)]
pub struct OrbitRig {
    camera: Camera,
    controller: OrbitController,
    input: InputProcessor,
    options: Options,
    target: Vec3,
    quit_requested: bool,
}

impl OrbitRig {
    /// Build a rig orbiting the world origin.
    ///
    /// The camera is seated on the orbit sphere immediately, so a rig is
    /// renderable before any input arrives.
    ///
    /// # Errors
    ///
    /// [`SwivelError::OptionsParse`] when the options fail validation.
    pub fn new(options: Options) -> Result<Self, SwivelError> {
        options.validate()?;

        let target = Vec3::ZERO;
        let mut controller = OrbitController::new();
        controller.refresh(target, &options.orbit);

        let camera = Camera::new(
            controller.pose().translation,
            target,
            &options.camera,
        );

        Ok(Self {
            camera,
            controller,
            input: InputProcessor::new(),
            options,
            target,
            quit_requested: false,
        })
    }

    /// Forward a window event. Pointer events feed the drag sampler;
    /// scroll zooms immediately.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Scroll { delta } => self.zoom(delta),
            InputEvent::CursorMoved { .. }
            | InputEvent::MouseButton { .. } => {
                self.input.handle_event(event);
            }
        }
    }

    /// Dispatch a pressed key through the keybinding map. Key strings
    /// use the `winit::keyboard::KeyCode` debug format ("KeyR",
    /// "Escape", ...).
    pub fn handle_key(&mut self, key: &str) {
        match self.options.keybindings.lookup(key) {
            Some("reset_view") => self.reset_view(),
            Some("quit") => self.quit_requested = true,
            _ => {}
        }
    }

    /// Advance one frame: sample the input processor and drive the drag
    /// state machine. Call exactly once per rendered frame.
    pub fn tick(&mut self) {
        let sample = self.input.sample();
        match sample.phase {
            DragPhase::Started => {
                log::debug!("drag started at {:?}", sample.position);
                self.controller.begin_drag(sample.position);
            }
            DragPhase::Active => {
                let result = self
                    .controller
                    .drag_to(sample.position, self.target, &self.options.orbit)
                    .map(|_| ());
                match result {
                    Ok(()) => self.sync_camera(),
                    // Unreachable through the rig's own sequencing; still
                    // surfaced rather than swallowed.
                    Err(e) => log::error!("orbit drag rejected: {e}"),
                }
            }
            DragPhase::Released => {
                log::debug!(
                    "drag released at yaw {:.1} pitch {:.1}",
                    self.controller.yaw_degrees(),
                    self.controller.pitch_degrees()
                );
                self.controller.end_drag();
            }
            DragPhase::Idle => {}
        }
    }

    /// Scale the orbit distance multiplicatively (positive delta zooms
    /// in), clamped to the configured bounds, and re-seat the camera
    /// along its current orientation.
    pub fn zoom(&mut self, delta: f32) {
        let orbit = &mut self.options.orbit;
        orbit.distance_to_target = (orbit.distance_to_target
            * (1.0 - delta * orbit.zoom_speed))
            .clamp(orbit.min_distance, orbit.max_distance);
        self.controller.refresh(self.target, &self.options.orbit);
        self.sync_camera();
    }

    /// Restore the identity orientation and re-seat the camera.
    pub fn reset_view(&mut self) {
        self.controller.reset_orientation();
        self.controller.refresh(self.target, &self.options.orbit);
        self.sync_camera();
        log::debug!("view reset");
    }

    /// Update the viewport: camera aspect and input normalization.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
        self.input.set_viewport(width, height);
    }

    /// Move the orbit target and re-seat the camera around it.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.controller.refresh(self.target, &self.options.orbit);
        self.sync_camera();
    }

    fn sync_camera(&mut self) {
        let pose = self.controller.pose();
        self.camera.eye = pose.translation;
        self.camera.up = pose.up();
        self.camera.target = self.target;
    }

    /// Current camera (eye/target/up kept in sync with the orbit pose).
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The underlying orbit controller.
    #[must_use]
    pub fn controller(&self) -> &OrbitController {
        &self.controller
    }

    /// Current options (zoom mutates the orbit distance in here).
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current orbit target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Whether a quit-bound key has been pressed.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
