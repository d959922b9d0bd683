//! Windowed demo that drives an [`OrbitRig`] from winit events.
//!
//! There is no rendering backend here: the demo exists to exercise the
//! rig end to end. The live pose (yaw/pitch/distance/fps) is surfaced in
//! the window title and on the log.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::error::SwivelError;
use crate::input::InputEvent;
use crate::options::Options;
use crate::rig::OrbitRig;
use crate::util::FrameTiming;

struct ViewerApp {
    window: Option<Window>,
    rig: OrbitRig,
    timing: FrameTiming,
    title: String,
}

impl ViewerApp {
    fn refresh_title(&self) {
        let Some(window) = &self.window else { return };
        let controller = self.rig.controller();
        window.set_title(&format!(
            "{} | yaw {:+.1} pitch {:+.1} dist {:.1} | {:.0} fps",
            self.title,
            controller.yaw_degrees(),
            controller.pitch_degrees(),
            self.rig.options().orbit.distance_to_target,
            self.timing.fps(),
        ));
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes().with_title(&*self.title);
        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                self.rig.resize(size.width, size.height);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.rig.resize(size.width, size.height);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.rig.handle_event(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.rig.handle_event(InputEvent::MouseButton {
                    button: button.into(),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.rig.handle_event(InputEvent::Scroll { delta: scroll });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        self.rig.handle_key(&format!("{code:?}"));
                    }
                }
                if self.rig.quit_requested() {
                    event_loop.exit();
                }
            }

            WindowEvent::RedrawRequested => {
                if self.timing.should_render() {
                    self.rig.tick();
                    self.timing.end_frame();
                    self.refresh_title();
                    let eye = self.rig.camera().eye;
                    log::trace!("camera eye {eye:?}");
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Open the demo window and run the event loop until close or a
/// quit-bound key.
///
/// # Errors
///
/// [`SwivelError::OptionsParse`] when the options fail validation,
/// [`SwivelError::Viewer`] when the event loop cannot be created or
/// exits abnormally.
pub fn run(options: Options) -> Result<(), SwivelError> {
    let event_loop = EventLoop::new()
        .map_err(|e| SwivelError::Viewer(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let target_fps = options.viewer.target_fps;
    let title = options.viewer.title.clone();
    let rig = OrbitRig::new(options)?;
    log::info!(
        "viewer starting: distance {}, {} deg per full swipe",
        rig.options().orbit.distance_to_target,
        rig.options().orbit.max_degrees_per_full_swipe
    );

    let mut app = ViewerApp {
        window: None,
        rig,
        timing: FrameTiming::new(target_fps),
        title,
    };
    event_loop
        .run_app(&mut app)
        .map_err(|e| SwivelError::Viewer(e.to_string()))
}
