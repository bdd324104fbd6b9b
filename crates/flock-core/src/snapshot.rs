//! Immutable per-tick neighbor state.
//!
//! The tick loop captures one `Vec<BoidSnapshot>` at the start of every tick
//! and every agent's flocking/raycast reads go against it.  New velocities
//! and positions land in a separate next-state buffer that is swapped in only
//! after all agents have computed, so results never depend on iteration
//! order (and a parallel compute phase needs no locks).

use glam::Vec3;

/// One agent's neighbor-visible state, as of the start of the current tick.
///
/// Indexed by `AgentId` — `snapshot[agent.index()]` is that agent's own entry
/// (self-exclusion during the neighbor scan is the reader's job).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoidSnapshot {
    pub position: Vec3,
    pub velocity: Vec3,
}
