//! Single-target steering primitives.

use glam::Vec3;

use flock_core::frame::normalize_or_zero;

/// Steer toward `target`: the force that turns the current velocity into a
/// full-speed velocity pointing at the target.
///
/// When `target == position` the desired direction is zero and the result is
/// a pure braking force (`-velocity`) — intentional: the agent slows rather
/// than picking an arbitrary heading.
#[inline]
pub fn seek(target: Vec3, position: Vec3, velocity: Vec3, desired_speed: f32) -> Vec3 {
    let direction = normalize_or_zero(target - position);
    direction * desired_speed - velocity
}

/// Steer away from `target`.  Identical to [`seek`] with the direction
/// reversed.
#[inline]
pub fn flee(target: Vec3, position: Vec3, velocity: Vec3, desired_speed: f32) -> Vec3 {
    let direction = normalize_or_zero(position - target);
    direction * desired_speed - velocity
}
