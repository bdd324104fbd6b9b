//! Raycast-driven containment and collision avoidance.
//!
//! Both forces resolve to zero when the agent has no ray-query provider —
//! that models "this agent cannot collide", not a failure.

use std::sync::LazyLock;

use glam::Vec3;

use flock_core::Frame;
use flock_core::frame::normalize_or_zero;
use flock_world::{BodyKind, Ray, RayCaster, RayHit};

/// Number of precomputed probe directions for the avoid-direction search.
pub const PROBE_DIRECTION_COUNT: usize = 200;

/// Evenly distributed unit directions on a sphere, golden-ratio spiral
/// ordering.  Probed in this fixed order by every agent.
static PROBE_DIRECTIONS: LazyLock<[Vec3; PROBE_DIRECTION_COUNT]> = LazyLock::new(|| {
    const GOLDEN_RATIO: f32 = 1.618_034;
    let angle_increment = std::f32::consts::TAU * GOLDEN_RATIO;

    std::array::from_fn(|i| {
        let t = (i as f32 + 0.5) / PROBE_DIRECTION_COUNT as f32;
        let inclination = (1.0 - 2.0 * t).acos();
        let azimuth = angle_increment * i as f32;
        Vec3::new(
            inclination.sin() * azimuth.cos(),
            inclination.sin() * azimuth.sin(),
            inclination.cos(),
        )
    })
});

/// The precomputed probe direction table.
#[inline]
pub fn probe_directions() -> &'static [Vec3; PROBE_DIRECTION_COUNT] {
    &PROBE_DIRECTIONS
}

// ── Containment ───────────────────────────────────────────────────────────────

/// Push the agent back inside the container.
///
/// Casts 6 rays from the agent's position along its ± local axes out to
/// `neighbor_radius`.  Among all container-boundary hits the one with the
/// largest `fraction` wins, and the unweighted force is the unit hit normal —
/// a pure push away from the wall, independent of distance (the chosen
/// policy; the composer's priority budget already guarantees containment is
/// served first).
pub fn containment_force(frame: &Frame, neighbor_radius: f32, caster: &dyn RayCaster) -> Vec3 {
    let p = frame.position;
    let rays = [
        Ray::new(p, p + frame.forward * neighbor_radius),
        Ray::new(p, p - frame.forward * neighbor_radius),
        Ray::new(p, p + frame.right * neighbor_radius),
        Ray::new(p, p - frame.right * neighbor_radius),
        Ray::new(p, p + frame.up * neighbor_radius),
        Ray::new(p, p - frame.up * neighbor_radius),
    ];

    let mut boundary: Option<RayHit> = None;
    for hits in caster.cast_many(&rays) {
        for hit in hits {
            if hit.body.kind() != BodyKind::Container {
                continue;
            }
            match boundary {
                Some(best) if best.fraction >= hit.fraction => {}
                _ => boundary = Some(hit),
            }
        }
    }

    match boundary {
        Some(hit) => normalize_or_zero(hit.normal),
        None => Vec3::ZERO,
    }
}

// ── Avoidance ─────────────────────────────────────────────────────────────────

/// Per-agent avoidance cache: the most recently successful clear direction.
///
/// Trying it first keeps the chosen escape route stable across ticks and
/// prevents oscillation between probe directions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AvoidState {
    pub last_clear: Option<Vec3>,
}

/// Steer around the nearest obstacle or boid ahead.
///
/// Casts one ray from the agent's position to `position + forward * lookahead`.
/// Among hits tagged obstacle or boid the *smallest* `fraction` wins (nearest
/// threat — the opposite tie-break from containment, which wants the nearest
/// wall per axis).  If a threat exists, the force seeks along the best clear
/// direction, scaled up as the threat gets closer:
/// `direction * max_speed * (1 - fraction) - velocity`.
pub fn avoidance_force(
    frame:     &Frame,
    velocity:  Vec3,
    max_speed: f32,
    lookahead: f32,
    caster:    &dyn RayCaster,
    state:     &mut AvoidState,
) -> Vec3 {
    let start = frame.position;
    let hits = caster.cast(start, start + frame.forward * lookahead);

    let mut threat_fraction: Option<f32> = None;
    for hit in &hits {
        if !matches!(hit.body.kind(), BodyKind::Obstacle | BodyKind::Boid) {
            continue;
        }
        match threat_fraction {
            Some(best) if best <= hit.fraction => {}
            _ => threat_fraction = Some(hit.fraction),
        }
    }

    let Some(fraction) = threat_fraction else {
        return Vec3::ZERO;
    };

    let direction = avoid_direction(start, frame.forward, lookahead, caster, state);
    direction * max_speed * (1.0 - fraction) - velocity
}

/// Find a collision-free direction to escape along.
///
/// Tries the cached last-clear direction first, then the fixed probe table;
/// a direction is clear when a `lookahead`-long ray along it reports no hits
/// at all.  If every direction is blocked (agent fully enclosed) the agent
/// reverses course: `-forward`.  The chosen direction is cached for next tick.
pub fn avoid_direction(
    position:  Vec3,
    forward:   Vec3,
    lookahead: f32,
    caster:    &dyn RayCaster,
    state:     &mut AvoidState,
) -> Vec3 {
    let is_clear =
        |dir: Vec3| caster.cast(position, position + dir * lookahead).is_empty();

    if let Some(cached) = state.last_clear {
        if is_clear(cached) {
            return cached;
        }
    }

    for &dir in probe_directions() {
        if is_clear(dir) {
            state.last_clear = Some(dir);
            return dir;
        }
    }

    // Fully enclosed: reverse course.  Not cached — it is a last resort, not
    // a known-clear route.
    state.last_clear = None;
    -forward
}
