//! Persistent stochastic wander on a projected sphere.
//!
//! The wander target lives on a virtual sphere projected ahead of the agent.
//! Each tick the target is re-projected onto the sphere around the *current*
//! origin and then nudged by a small random jitter, so the steering direction
//! drifts continuously instead of jumping to per-tick-independent noise.

use glam::Vec3;

use flock_core::{AgentRng, WanderParams};

use crate::seek::seek;

/// The wander generator's persistent state: the current target point.
///
/// The zero vector is the "uninitialized" sentinel; the first call picks a
/// random point on the projected sphere and the state tracks from there.
/// Owned exclusively by one agent.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WanderState {
    pub target: Vec3,
}

/// One wander step: update `state.target` and return the seek force toward it.
///
/// `params.radius` and `params.jitter` must be strictly positive (enforced by
/// `Tuning::validate` before the simulation starts) — a zero radius would
/// make the direction normalization below undefined.
pub fn wander_force(
    state:     &mut WanderState,
    position:  Vec3,
    forward:   Vec3,
    velocity:  Vec3,
    params:    &WanderParams,
    max_speed: f32,
    rng:       &mut AgentRng,
) -> Vec3 {
    let sphere_origin = position + forward * params.forward_projection;

    if state.target == Vec3::ZERO {
        state.target = sphere_origin + rng.point_on_sphere(params.radius);
    }

    // Re-project the target onto the sphere around the current origin, then
    // jitter it.  A target that happens to coincide with the origin
    // contributes no direction this tick; the jitter displaces it again.
    let to_target = (state.target - sphere_origin)
        .try_normalize()
        .unwrap_or(Vec3::ZERO);
    state.target = sphere_origin + to_target * params.radius;
    state.target += rng.point_on_sphere(params.jitter);

    seek(state.target, position, velocity, max_speed)
}
