//! Plain data row types written by output backends.

/// A snapshot of one boid's motion state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoidSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub x:        f32,
    pub y:        f32,
    pub z:        f32,
    pub vx:       f32,
    pub vy:       f32,
    pub vz:       f32,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:          u64,
    /// Simulated seconds elapsed at this tick.
    pub sim_time_secs: f64,
    /// Mean velocity magnitude across all boids (0 for an empty flock).
    pub mean_speed:    f32,
}
