//! Rigid transform with the local/world rotation split the orbit math
//! relies on.
//!
//! The distinction between [`rotate_local`](Transform::rotate_local)
//! (post-multiply, axis in the transform's own frame) and
//! [`rotate_world`](Transform::rotate_world) (pre-multiply, axis in world
//! space) is load-bearing for the orbit algorithm: local pitches collect on
//! one side of the quaternion product and world yaws on the other, so the
//! two never couple into roll.

use glam::{Quat, Vec3};

/// Position and orientation in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub translation: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
}

impl Transform {
    /// The identity transform: at the origin, unrotated.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Transform at `translation` with no rotation.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    /// Rotate by a signed angle around an axis expressed in this
    /// transform's own local frame.
    pub fn rotate_local(&mut self, axis: Vec3, degrees: f32) {
        self.rotation =
            self.rotation * Quat::from_axis_angle(axis, degrees.to_radians());
    }

    /// Rotate by a signed angle around a world-space axis.
    pub fn rotate_world(&mut self, axis: Vec3, degrees: f32) {
        self.rotation =
            Quat::from_axis_angle(axis, degrees.to_radians()) * self.rotation;
    }

    /// Move along this transform's own axes.
    pub fn translate_local(&mut self, offset: Vec3) {
        self.translation += self.rotation * offset;
    }

    /// Local +X in world space.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Local +Y in world space.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Facing direction in world space. Cameras look down local -Z
    /// (right-handed, glam/wgpu convention).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec3_near(a: Vec3, b: Vec3) {
        assert!(
            (a - b).length() < 1e-5,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn world_yaw_turns_forward() {
        let mut t = Transform::IDENTITY;
        t.rotate_world(Vec3::Y, 90.0);
        assert_vec3_near(t.forward(), Vec3::NEG_X);
        assert_vec3_near(t.up(), Vec3::Y);
    }

    #[test]
    fn local_and_world_pitch_diverge_once_yawed() {
        let mut local = Transform::IDENTITY;
        local.rotate_world(Vec3::Y, 90.0);
        let mut world = local;

        // Pitching about the transform's own lateral axis tilts the view
        // up; pitching about the world X axis (now pointing along the
        // view direction) rolls instead.
        local.rotate_local(Vec3::X, 90.0);
        world.rotate_world(Vec3::X, 90.0);

        assert_vec3_near(local.forward(), Vec3::Y);
        assert_vec3_near(world.forward(), Vec3::NEG_X);
        assert!((local.forward() - world.forward()).length() > 1.0);
    }

    #[test]
    fn translate_local_follows_orientation() {
        let mut t = Transform::IDENTITY;
        t.rotate_world(Vec3::Y, 90.0);
        t.translate_local(Vec3::Z * 5.0);
        assert_vec3_near(t.translation, Vec3::X * 5.0);
    }

    #[test]
    fn zero_angle_rotations_are_identity() {
        let mut t = Transform::from_translation(Vec3::ONE);
        t.rotate_local(Vec3::X, 45.0);
        let before = t.rotation;
        t.rotate_local(Vec3::X, 0.0);
        t.rotate_world(Vec3::Y, 0.0);
        assert!((t.rotation.dot(before)).abs() > 1.0 - 1e-6);
    }
}
