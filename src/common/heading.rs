//! Facing conventions.
//!
//! Sprites are authored pointing up (+Y), so an entity facing `dir` is rotated by
//! `atan2(dir) - 90°` around Z.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

/// Unit vector the entity is facing.
#[inline]
pub fn facing(tf: &Transform) -> Vec2 {
    (tf.rotation * Vec3::Y).truncate()
}

/// Rotation that makes an up-pointing sprite face `dir`.
#[inline]
pub fn facing_rotation(dir: Vec2) -> Quat {
    Quat::from_rotation_z(dir.y.atan2(dir.x) - FRAC_PI_2)
}
