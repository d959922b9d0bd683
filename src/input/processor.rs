//! Folds raw pointer events into a per-tick drag sample.
//!
//! The `InputProcessor` owns all transient pointer state (cursor
//! position, primary-button state, press/release latches) and the
//! viewport size used for normalization. Window events are folded in as
//! they arrive; once per tick the host calls
//! [`sample`](InputProcessor::sample) and receives the drag phase plus
//! the pointer position in viewport-normalized coordinates — the only
//! contract the orbit core consumes.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};

/// Drag phase reported for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// No drag activity.
    Idle,
    /// The primary button went down since the last sample. The camera
    /// must not move on this tick; the position is the drag's reference
    /// sample.
    Started,
    /// Drag in progress.
    Active,
    /// The primary button was released since the last sample.
    Released,
}

/// One per-tick input sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Drag phase for this tick.
    pub phase: DragPhase,
    /// Pointer position, viewport-normalized: the visible screen spans
    /// [0,1] per axis. Not clamped — off-screen positions extrapolate.
    pub position: Vec2,
}

/// Converts raw pointer events into per-tick [`DragSample`]s.
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Viewport size in physical pixels (normalization denominator).
    viewport: Vec2,
    /// Last cursor position in physical pixels.
    cursor: Vec2,
    /// Whether the primary button is currently held.
    mouse_pressed: bool,
    /// A press happened since the last sample.
    press_pending: bool,
    /// A release happened since the last sample.
    release_pending: bool,
}

impl InputProcessor {
    /// Processor with a degenerate 1x1 viewport. Call
    /// [`set_viewport`](Self::set_viewport) before sampling.
    #[must_use]
    pub fn new() -> Self {
        Self {
            viewport: Vec2::ONE,
            cursor: Vec2::ZERO,
            mouse_pressed: false,
            press_pending: false,
            release_pending: false,
        }
    }

    /// Update the viewport size used for normalization. Zero sizes are
    /// ignored (a minimized window must not divide by zero).
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.viewport = Vec2::new(width as f32, height as f32);
        }
    }

    /// Fold one event into the transient state. Only the left button
    /// drives dragging; other events are ignored here.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                if pressed && !self.mouse_pressed {
                    self.press_pending = true;
                } else if !pressed && self.mouse_pressed {
                    self.release_pending = true;
                }
                self.mouse_pressed = pressed;
            }
            InputEvent::MouseButton { .. } | InputEvent::Scroll { .. } => {}
        }
    }

    /// Take the sample for this tick, consuming the press/release
    /// latches. Call exactly once per tick.
    ///
    /// A press and release arriving within the same tick degenerate
    /// gracefully: `Started` this tick, `Released` the next.
    pub fn sample(&mut self) -> DragSample {
        let phase = if self.press_pending {
            self.press_pending = false;
            DragPhase::Started
        } else if self.mouse_pressed {
            DragPhase::Active
        } else if self.release_pending {
            self.release_pending = false;
            DragPhase::Released
        } else {
            DragPhase::Idle
        };

        DragSample {
            phase,
            position: self.cursor / self.viewport,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press() -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        }
    }

    fn release() -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        }
    }

    #[test]
    fn press_drag_release_cycle() {
        let mut input = InputProcessor::new();
        input.set_viewport(1000, 500);

        input.handle_event(InputEvent::CursorMoved { x: 500.0, y: 250.0 });
        assert_eq!(input.sample().phase, DragPhase::Idle);

        input.handle_event(press());
        let started = input.sample();
        assert_eq!(started.phase, DragPhase::Started);
        assert_eq!(started.position, Vec2::new(0.5, 0.5));

        input.handle_event(InputEvent::CursorMoved { x: 750.0, y: 100.0 });
        let active = input.sample();
        assert_eq!(active.phase, DragPhase::Active);
        assert_eq!(active.position, Vec2::new(0.75, 0.2));

        input.handle_event(release());
        assert_eq!(input.sample().phase, DragPhase::Released);
        assert_eq!(input.sample().phase, DragPhase::Idle);
    }

    #[test]
    fn off_screen_positions_are_not_clamped() {
        let mut input = InputProcessor::new();
        input.set_viewport(1000, 500);
        input.handle_event(InputEvent::CursorMoved {
            x: 1500.0,
            y: -100.0,
        });
        let sample = input.sample();
        assert_eq!(sample.position, Vec2::new(1.5, -0.2));
    }

    #[test]
    fn press_and_release_within_one_tick() {
        let mut input = InputProcessor::new();
        input.set_viewport(100, 100);
        input.handle_event(press());
        input.handle_event(release());
        assert_eq!(input.sample().phase, DragPhase::Started);
        assert_eq!(input.sample().phase, DragPhase::Released);
        assert_eq!(input.sample().phase, DragPhase::Idle);
    }

    #[test]
    fn non_primary_buttons_do_not_drag() {
        let mut input = InputProcessor::new();
        input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert_eq!(input.sample().phase, DragPhase::Idle);
    }

    #[test]
    fn zero_viewport_is_ignored() {
        let mut input = InputProcessor::new();
        input.set_viewport(800, 600);
        input.set_viewport(0, 600);
        input.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 });
        assert_eq!(input.sample().position, Vec2::new(0.5, 0.5));
    }
}
