//! Read-only simulation state passed to every steering call.

use flock_core::{BoidSnapshot, Tick, Tuning};
use flock_world::RayCaster;

/// A read-only view of the simulation state for one tick.
///
/// `SteeringContext` is built once per agent per tick by the sim loop and
/// shared immutably across the whole compute phase.  All borrows live for
/// the duration of that phase; the sim never allows mutable access to these
/// structures while a context is live.
pub struct SteeringContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Simulated seconds this tick integrates.
    pub delta_time: f32,

    /// Steering parameters, read fresh each tick so live retuning between
    /// ticks takes effect immediately.
    pub tuning: &'a Tuning,

    /// Every agent's neighbor-visible state as of the start of the tick,
    /// indexed by `AgentId`.  Includes the calling agent's own entry;
    /// self-exclusion is the engine's job.
    pub boids: &'a [BoidSnapshot],

    /// Ray-query provider for this agent, or `None` when the agent has no
    /// collider — containment and avoidance then resolve to zero.
    pub caster: Option<&'a dyn RayCaster>,
}

impl<'a> SteeringContext<'a> {
    #[inline]
    pub fn new(
        tick:       Tick,
        delta_time: f32,
        tuning:     &'a Tuning,
        boids:      &'a [BoidSnapshot],
        caster:     Option<&'a dyn RayCaster>,
    ) -> Self {
        Self { tick, delta_time, tuning, boids, caster }
    }
}
