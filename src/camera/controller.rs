//! Drag-to-orbit camera controller.
//!
//! The controller turns a stream of viewport-normalized pointer samples
//! into a camera pose that stays on a sphere around a target point,
//! always facing it. Pointer coordinates are normalized so the visible
//! screen spans [0,1] per axis; values outside that range are legal and
//! simply extrapolate (off-screen drags keep orbiting).
//!
//! A full-viewport drag along one axis rotates the camera by exactly
//! [`OrbitOptions::max_degrees_per_full_swipe`] degrees about the
//! corresponding axis. The mapping is purely incremental per tick, so the
//! total rotation for a given drag distance does not depend on frame
//! rate: per-tick deltas telescope to the net pointer displacement.

use glam::{Quat, Vec2, Vec3};

use crate::error::SwivelError;
use crate::options::OrbitOptions;
use crate::transform::Transform;

/// Drag gesture state.
///
/// The previous pointer sample only exists while a drag is active, which
/// makes "continue without start" a checkable error instead of a silently
/// defaulted position.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    /// No active drag; the pose is frozen.
    Idle,
    /// Drag in progress; `prev` is the pointer sample from the last tick.
    Dragging {
        /// Previous pointer position, viewport-normalized.
        prev: Vec2,
    },
}

/// Orbits the camera around a target point in response to pointer drags.
///
/// The controller owns the camera pose exclusively. The target and the
/// orbit configuration are read per call and never stored, so they remain
/// externally owned.
#[derive(Debug, Clone)]
pub struct OrbitController {
    drag: DragState,
    pose: Transform,
    yaw_degrees: f32,
    pitch_degrees: f32,
}

impl OrbitController {
    /// Controller with an unrotated pose and no active drag. Call
    /// [`refresh`](Self::refresh) afterwards to seat the camera on the
    /// orbit sphere.
    #[must_use]
    pub fn new() -> Self {
        Self {
            drag: DragState::Idle,
            pose: Transform::IDENTITY,
            yaw_degrees: 0.0,
            pitch_degrees: 0.0,
        }
    }

    /// Start (or restart) a drag gesture at the given pointer position.
    ///
    /// Records the sample as the reference for the next
    /// [`drag_to`](Self::drag_to) and transitions to the dragging state.
    /// A press during an active drag simply re-arms it: the previous
    /// sample is overwritten. The camera does not move.
    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.drag = DragState::Dragging { prev: pointer };
    }

    /// Continue an active drag, rotating the pose around `target`.
    ///
    /// Rotation is proportional to the pointer displacement since the
    /// previous sample: a displacement of 1.0 along an axis (one full
    /// viewport) maps to `config.max_degrees_per_full_swipe` degrees.
    /// After every call the pose sits exactly
    /// `config.distance_to_target` from `target`, facing it.
    ///
    /// # Errors
    ///
    /// [`SwivelError::DragNotStarted`] when no drag is active. The pose
    /// is left untouched in that case.
    pub fn drag_to(
        &mut self,
        pointer: Vec2,
        target: Vec3,
        config: &OrbitOptions,
    ) -> Result<&Transform, SwivelError> {
        let DragState::Dragging { prev } = self.drag else {
            return Err(SwivelError::DragNotStarted);
        };

        // Previous minus current: dragging the pointer toward +x swings
        // the camera the other way, which is the natural grab-the-world
        // feel.
        let delta = prev - pointer;
        let yaw = -delta.x * config.max_degrees_per_full_swipe;
        let pitch = delta.y * config.max_degrees_per_full_swipe;

        self.apply_orbit_step(yaw, pitch, target, config.distance_to_target);
        self.yaw_degrees += yaw;
        self.pitch_degrees += pitch;
        self.drag = DragState::Dragging { prev: pointer };
        Ok(&self.pose)
    }

    /// End the active drag, freezing the pose. No-op when idle.
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Re-seat the pose on the orbit sphere without rotating: at
    /// `config.distance_to_target` from `target` along the current
    /// orientation, facing the target. Legal in any state; used after
    /// construction, target moves, and distance (zoom) changes.
    pub fn refresh(&mut self, target: Vec3, config: &OrbitOptions) {
        self.apply_orbit_step(0.0, 0.0, target, config.distance_to_target);
    }

    /// Restore the identity orientation and zero the angle counters.
    /// The position is stale until the next [`refresh`](Self::refresh)
    /// or drag tick.
    pub fn reset_orientation(&mut self) {
        self.pose.rotation = Quat::IDENTITY;
        self.yaw_degrees = 0.0;
        self.pitch_degrees = 0.0;
    }

    /// One orbit step: reposition at the target, rotate, step back onto
    /// the sphere.
    ///
    /// The position reset is unconditional rather than a re-derivation
    /// from the current pose, so the step composes identically regardless
    /// of where the previous tick left the camera. The rotation order is
    /// load-bearing: pitch about the camera's own lateral axis first,
    /// yaw about the *world* vertical axis second. Using the local
    /// vertical for the yaw, or swapping the order, couples the two
    /// rotations into roll and the orbit degenerates into a spiral.
    fn apply_orbit_step(
        &mut self,
        yaw_degrees: f32,
        pitch_degrees: f32,
        target: Vec3,
        distance: f32,
    ) {
        self.pose.translation = target;
        self.pose.rotate_local(Vec3::X, pitch_degrees);
        self.pose.rotate_world(Vec3::Y, yaw_degrees);
        // The camera looks down local -Z, so stepping along local +Z
        // backs it away from the target while it keeps facing it.
        self.pose.translate_local(Vec3::Z * distance);
    }

    /// Current camera pose.
    #[must_use]
    pub fn pose(&self) -> &Transform {
        &self.pose
    }

    /// Current orientation.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.pose.rotation
    }

    /// Accumulated yaw in degrees since construction (or the last
    /// [`reset_orientation`](Self::reset_orientation)).
    #[must_use]
    pub fn yaw_degrees(&self) -> f32 {
        self.yaw_degrees
    }

    /// Accumulated pitch in degrees since construction (or the last
    /// [`reset_orientation`](Self::reset_orientation)).
    #[must_use]
    pub fn pitch_degrees(&self) -> f32 {
        self.pitch_degrees
    }

    /// Whether a drag gesture is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIST: f32 = 10.0;

    fn config() -> OrbitOptions {
        OrbitOptions {
            distance_to_target: DIST,
            max_degrees_per_full_swipe: 180.0,
            ..OrbitOptions::default()
        }
    }

    fn assert_on_sphere(ctrl: &OrbitController, target: Vec3) {
        let offset = ctrl.pose().translation - target;
        assert!(
            (offset.length() - DIST).abs() < 1e-4,
            "distance drifted: {}",
            offset.length()
        );
        // Forward axis points back at the target.
        let toward = (target - ctrl.pose().translation).normalize();
        assert!(
            (ctrl.pose().forward() - toward).length() < 1e-4,
            "not facing target"
        );
    }

    fn same_rotation(a: Quat, b: Quat) -> bool {
        // q and -q encode the same rotation.
        a.dot(b).abs() > 1.0 - 1e-5
    }

    #[test]
    fn refresh_seats_camera_behind_target() {
        let target = Vec3::new(3.0, 1.0, -2.0);
        let mut ctrl = OrbitController::new();
        ctrl.refresh(target, &config());

        assert!(
            (ctrl.pose().translation - (target + Vec3::Z * DIST)).length()
                < 1e-5
        );
        assert_on_sphere(&ctrl, target);
    }

    #[test]
    fn distance_invariant_holds_across_arbitrary_drags() {
        let target = Vec3::new(-4.0, 2.0, 7.0);
        let mut ctrl = OrbitController::new();
        ctrl.begin_drag(Vec2::new(0.5, 0.5));
        for pointer in [
            Vec2::new(0.62, 0.40),
            Vec2::new(0.91, 0.13),
            Vec2::new(1.35, -0.20), // off-screen extrapolation is legal
            Vec2::new(0.05, 0.88),
        ] {
            let _ = ctrl.drag_to(pointer, target, &config()).unwrap();
            assert_on_sphere(&ctrl, target);
        }
    }

    #[test]
    fn zero_delta_keeps_orientation() {
        let mut ctrl = OrbitController::new();
        ctrl.begin_drag(Vec2::new(0.3, 0.7));
        let _ = ctrl
            .drag_to(Vec2::new(0.55, 0.25), Vec3::ZERO, &config())
            .unwrap();
        let before = ctrl.orientation();
        let pos_before = ctrl.pose().translation;

        // Same pointer again: no displacement, no rotation. The position
        // is still reset-and-retranslated to the same point.
        let _ = ctrl
            .drag_to(Vec2::new(0.55, 0.25), Vec3::ZERO, &config())
            .unwrap();
        assert!(same_rotation(ctrl.orientation(), before));
        assert!((ctrl.pose().translation - pos_before).length() < 1e-5);
    }

    #[test]
    fn full_horizontal_swipe_yields_negative_max_yaw() {
        // delta = prev - current = (1, 0)
        let mut ctrl = OrbitController::new();
        ctrl.begin_drag(Vec2::new(1.0, 0.0));
        let _ = ctrl
            .drag_to(Vec2::new(0.0, 0.0), Vec3::ZERO, &config())
            .unwrap();

        assert_eq!(ctrl.yaw_degrees(), -180.0);
        assert_eq!(ctrl.pitch_degrees(), 0.0);
        assert!(same_rotation(
            ctrl.orientation(),
            Quat::from_rotation_y(-std::f32::consts::PI)
        ));
        // Half orbit: the camera ends up on the far side of the target.
        assert!(
            (ctrl.pose().translation - Vec3::new(0.0, 0.0, -DIST)).length()
                < 1e-4
        );
    }

    #[test]
    fn full_vertical_swipe_yields_positive_max_pitch() {
        // delta = prev - current = (0, 1)
        let mut ctrl = OrbitController::new();
        ctrl.begin_drag(Vec2::new(0.0, 1.0));
        let _ = ctrl
            .drag_to(Vec2::new(0.0, 0.0), Vec3::ZERO, &config())
            .unwrap();

        assert_eq!(ctrl.pitch_degrees(), 180.0);
        assert_eq!(ctrl.yaw_degrees(), 0.0);
        assert!(same_rotation(
            ctrl.orientation(),
            Quat::from_rotation_x(std::f32::consts::PI)
        ));
    }

    #[test]
    fn sub_drags_telescope_to_the_single_drag_result() {
        let target = Vec3::new(1.0, -2.0, 3.0);
        let start = Vec2::new(0.2, 0.9);
        let end = Vec2::new(0.7, 0.6);

        let mut stepped = OrbitController::new();
        stepped.begin_drag(start);
        // Zigzag path through mixed x/y displacements ending at `end`.
        for pointer in [
            Vec2::new(0.5, 0.1),
            Vec2::new(0.9, 0.4),
            Vec2::new(0.3, 0.3),
            end,
        ] {
            let _ = stepped.drag_to(pointer, target, &config()).unwrap();
        }

        let mut direct = OrbitController::new();
        direct.begin_drag(start);
        let _ = direct.drag_to(end, target, &config()).unwrap();

        assert!(same_rotation(stepped.orientation(), direct.orientation()));
        assert!(
            (stepped.pose().translation - direct.pose().translation).length()
                < 1e-4
        );
        assert!((stepped.yaw_degrees() - direct.yaw_degrees()).abs() < 1e-4);
        assert!(
            (stepped.pitch_degrees() - direct.pitch_degrees()).abs() < 1e-4
        );
    }

    #[test]
    fn drag_without_start_fails_fast() {
        let mut ctrl = OrbitController::new();
        let err = ctrl
            .drag_to(Vec2::new(0.5, 0.5), Vec3::ZERO, &config())
            .unwrap_err();
        assert!(matches!(err, SwivelError::DragNotStarted));
        // No pose was silently computed.
        assert_eq!(*ctrl.pose(), Transform::IDENTITY);
    }

    #[test]
    fn ending_a_drag_freezes_the_state_machine() {
        let mut ctrl = OrbitController::new();
        ctrl.begin_drag(Vec2::ZERO);
        assert!(ctrl.is_dragging());
        ctrl.end_drag();
        assert!(!ctrl.is_dragging());
        assert!(ctrl
            .drag_to(Vec2::new(0.1, 0.1), Vec3::ZERO, &config())
            .is_err());

        // A new press re-arms the gesture from scratch.
        ctrl.begin_drag(Vec2::new(0.4, 0.4));
        assert!(ctrl
            .drag_to(Vec2::new(0.5, 0.4), Vec3::ZERO, &config())
            .is_ok());
    }
}
