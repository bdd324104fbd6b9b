//! The force composer and motion integrator.
//!
//! Candidate forces are collected in a fixed priority order — containment,
//! avoidance, separation, alignment, cohesion, wander — each multiplied by
//! its external weight, then accumulated under a hard budget: accumulation
//! stops (keeping what is already accumulated) as soon as the next force
//! would push the total past `|max_force|`.  Boundary keeping and threat
//! avoidance therefore always get their share of the budget before flocking
//! or wander are even considered.
//!
//! Force semantics: the composed force is a per-tick velocity delta
//! (`velocity += final_force`); `delta_time` scales only the position
//! integration.  Top speed is governed by the explicit speed clamp.

use glam::Vec3;

use flock_core::frame::clamp_magnitude;
use flock_core::{AgentId, AgentRng, Frame};

use crate::avoid::{AvoidState, avoidance_force, containment_force};
use crate::context::SteeringContext;
use crate::flock::flock_forces;
use crate::wander::{WanderState, wander_force};

// ── Per-agent persistent state ────────────────────────────────────────────────

/// Steering state that persists across ticks, owned by one agent and created
/// and destroyed with it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SteeringState {
    pub wander: WanderState,
    pub avoid:  AvoidState,
}

/// The result of one steering step: the agent's next frame and velocity,
/// destined for the tick loop's next-state buffer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepOutput {
    pub frame:    Frame,
    pub velocity: Vec3,
}

// ── Composition ───────────────────────────────────────────────────────────────

/// Accumulate `forces` in order under the `max_force` budget.
///
/// A force that would push `|total|` past `|max_force|` ends accumulation —
/// it and everything after it is dropped for this tick rather than scaled
/// down.  The first nonzero force is always accepted (the component-wise
/// clamp afterwards bounds it), so a single over-budget containment force
/// still acts instead of leaving the agent uncontrolled.
pub fn compose_budgeted(forces: impl IntoIterator<Item = Vec3>, max_force: Vec3) -> Vec3 {
    let budget = max_force.length();
    let mut total = Vec3::ZERO;

    for force in forces {
        if total != Vec3::ZERO && (total + force).length() > budget {
            break;
        }
        total += force;
    }

    total.clamp(-max_force, max_force)
}

/// One full steering-and-integration step for `agent`.
///
/// Reads only the immutable tick context; mutates only the agent's own
/// persistent steering state and RNG.  The caller writes the returned state
/// into the next-tick buffer.
pub fn step(
    agent:    AgentId,
    frame:    &Frame,
    velocity: Vec3,
    state:    &mut SteeringState,
    ctx:      &SteeringContext<'_>,
    rng:      &mut AgentRng,
) -> StepOutput {
    let tuning = ctx.tuning;
    let w = tuning.weights;

    // Candidate forces in priority order.  A zero weight disables the force
    // entirely — its inputs (rays, neighbor scan) are never computed.
    let mut forces = [Vec3::ZERO; 6];

    if let Some(caster) = ctx.caster {
        if w.containment != 0.0 {
            forces[0] = containment_force(frame, tuning.neighbor_radius, caster) * w.containment;
        }
        if w.avoidance != 0.0 {
            forces[1] = avoidance_force(
                frame,
                velocity,
                tuning.max_speed,
                tuning.lookahead,
                caster,
                &mut state.avoid,
            ) * w.avoidance;
        }
    }

    if w.separation != 0.0 || w.alignment != 0.0 || w.cohesion != 0.0 {
        let flock = flock_forces(agent, frame.position, tuning.neighbor_radius, ctx.boids);
        forces[2] = flock.separation * w.separation;
        forces[3] = flock.alignment * w.alignment;
        forces[4] = flock.cohesion * w.cohesion;
    }

    if w.wander != 0.0 {
        forces[5] = wander_force(
            &mut state.wander,
            frame.position,
            frame.forward,
            velocity,
            &tuning.wander,
            tuning.max_speed,
            rng,
        ) * w.wander;
    }

    let final_force = compose_budgeted(forces, tuning.max_force);

    // Integrate.
    let velocity = clamp_magnitude(velocity + final_force, tuning.min_speed, tuning.max_speed);

    let mut next = *frame;
    next.position += velocity * ctx.delta_time;
    // A stationary agent keeps its previous heading rather than snapping to a
    // default.
    if let Some(heading) = velocity.try_normalize() {
        next.forward = heading;
    }
    next.orthogonalize();

    StepOutput { frame: next, velocity }
}
