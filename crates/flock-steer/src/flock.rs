//! The flocking aggregator: separation, alignment, and cohesion from one
//! O(n) scan over the tick snapshot.

use glam::Vec3;

use flock_core::frame::normalize_or_zero;
use flock_core::{AgentId, BoidSnapshot};

/// The three classic flocking forces, unweighted and unit-normalized.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlockForces {
    pub separation: Vec3,
    pub alignment:  Vec3,
    pub cohesion:   Vec3,
}

/// Aggregate flocking forces for `agent` from every other boid within
/// `neighbor_radius`.
///
/// Reads come from the per-tick snapshot, never live state, so results are
/// identical regardless of the order agents are processed in.  With no
/// neighbors in range all three forces are exactly zero — isolation means no
/// flocking influence, not an error.
///
/// Weights are applied afterwards by the composer, so retuning never changes
/// this scan.
pub fn flock_forces(
    agent:           AgentId,
    position:        Vec3,
    neighbor_radius: f32,
    boids:           &[BoidSnapshot],
) -> FlockForces {
    let mut separation = Vec3::ZERO;
    let mut alignment = Vec3::ZERO;
    let mut cohesion = Vec3::ZERO;
    let mut neighbor_count = 0u32;

    for (i, other) in boids.iter().enumerate() {
        if i == agent.index() {
            continue;
        }
        let distance = other.position.distance(position);
        if distance < neighbor_radius {
            separation += position - other.position;
            alignment += other.velocity;
            cohesion += other.position;
            neighbor_count += 1;
        }
    }

    if neighbor_count == 0 {
        return FlockForces::default();
    }

    let n = neighbor_count as f32;
    separation /= n;
    alignment /= n;
    cohesion /= n;

    FlockForces {
        separation: normalize_or_zero(separation),
        alignment:  normalize_or_zero(alignment),
        // Cohesion is a *direction toward the flock centroid*, not the raw
        // mean position.
        cohesion:   normalize_or_zero(cohesion - position),
    }
}
