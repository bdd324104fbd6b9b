//! The bounded arena: an axis-aligned box with sphere obstacles, plus a
//! per-tick view that also reports boids as ray targets.
//!
//! All intersection math is analytic (plane crossing for the walls, the
//! quadratic for spheres) and operates on finite segments, so `fraction`
//! values are always in `[0, 1]`.

use glam::Vec3;

use flock_core::{AgentId, BoidSnapshot, ObstacleId};

use crate::ray::{BoxFace, HitBody, RayCaster, RayHit};
use crate::{WorldError, WorldResult};

const ALL_FACES: [BoxFace; 6] = [
    BoxFace::PosX,
    BoxFace::NegX,
    BoxFace::PosY,
    BoxFace::NegY,
    BoxFace::PosZ,
    BoxFace::NegZ,
];

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// A static sphere obstacle inside the arena.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub center: Vec3,
    pub radius: f32,
}

// ── Arena ─────────────────────────────────────────────────────────────────────

/// The static environment: a box of `half_extent` centered at the origin,
/// walls facing inward, plus zero or more sphere obstacles.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    half_extent: f32,
    obstacles:   Vec<Obstacle>,
    /// Collision radius used when boids are reported as ray targets.
    boid_radius: f32,
}

impl Arena {
    /// A box of `half_extent` with no obstacles and the default boid radius.
    pub fn new(half_extent: f32) -> WorldResult<Self> {
        if half_extent <= 0.0 {
            return Err(WorldError::Config(format!(
                "arena half_extent must be > 0, got {half_extent}"
            )));
        }
        Ok(Self {
            half_extent,
            obstacles: Vec::new(),
            boid_radius: 0.25,
        })
    }

    /// Add a sphere obstacle, returning its ID.
    pub fn add_obstacle(&mut self, center: Vec3, radius: f32) -> WorldResult<ObstacleId> {
        if radius <= 0.0 {
            return Err(WorldError::Config(format!(
                "obstacle radius must be > 0, got {radius}"
            )));
        }
        let id = ObstacleId(self.obstacles.len() as u32);
        self.obstacles.push(Obstacle { center, radius });
        Ok(id)
    }

    /// Override the sphere radius boids present to ray queries.
    pub fn set_boid_radius(&mut self, radius: f32) -> WorldResult<()> {
        if radius <= 0.0 {
            return Err(WorldError::Config(format!(
                "boid radius must be > 0, got {radius}"
            )));
        }
        self.boid_radius = radius;
        Ok(())
    }

    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// A [`RayCaster`] over this arena plus the current tick's boids.
    ///
    /// `skip` is the casting agent — its own sphere is excluded so every ray
    /// it fires does not trivially begin inside a hit.
    pub fn view<'a>(&'a self, boids: &'a [BoidSnapshot], skip: AgentId) -> ArenaView<'a> {
        ArenaView { arena: self, boids, skip }
    }

    // ── Intersection helpers ──────────────────────────────────────────────

    /// Wall crossings of the segment, inward normals.
    fn cast_walls(&self, start: Vec3, end: Vec3, out: &mut Vec<RayHit>) {
        let dir = end - start;
        let h = self.half_extent;

        for face in ALL_FACES {
            let (axis, plane) = match face {
                BoxFace::PosX => (0, h),
                BoxFace::NegX => (0, -h),
                BoxFace::PosY => (1, h),
                BoxFace::NegY => (1, -h),
                BoxFace::PosZ => (2, h),
                BoxFace::NegZ => (2, -h),
            };
            let d = dir[axis];
            if d.abs() <= f32::EPSILON {
                continue;
            }
            let t = (plane - start[axis]) / d;
            if !(0.0..=1.0).contains(&t) {
                continue;
            }
            let point = start + dir * t;
            // Crossing must land on the face, not its infinite plane.
            let on_face = (0..3)
                .filter(|&a| a != axis)
                .all(|a| point[a].abs() <= h + 1e-4);
            if on_face {
                out.push(RayHit {
                    body:     HitBody::Wall(face),
                    point,
                    normal:   face.inward_normal(),
                    fraction: t,
                });
            }
        }
    }

    /// Segment-vs-sphere intersection.  Returns the entry fraction, or 0 when
    /// the segment starts inside (pushed out along the center-to-start axis).
    fn cast_sphere(start: Vec3, end: Vec3, center: Vec3, radius: f32) -> Option<(f32, Vec3, Vec3)> {
        let dir = end - start;
        let m = start - center;

        let a = dir.dot(dir);
        let b = 2.0 * m.dot(dir);
        let c = m.dot(m) - radius * radius;

        if c < 0.0 {
            // Start is inside the sphere: immediate contact.
            let normal = m.try_normalize().unwrap_or(Vec3::Y);
            return Some((0.0, start, normal));
        }
        if a <= f32::EPSILON {
            return None; // zero-length segment outside the sphere
        }

        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return None;
        }
        let t = (-b - disc.sqrt()) / (2.0 * a);
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        let point = start + dir * t;
        let normal = (point - center) / radius;
        Some((t, point, normal))
    }
}

// ── ArenaView ─────────────────────────────────────────────────────────────────

/// A borrowed, per-tick [`RayCaster`]: arena walls + obstacles + the tick
/// snapshot's boids (minus the casting agent).
///
/// Cheap to construct — one per agent per tick.
pub struct ArenaView<'a> {
    arena: &'a Arena,
    boids: &'a [BoidSnapshot],
    skip:  AgentId,
}

impl RayCaster for ArenaView<'_> {
    fn cast(&self, start: Vec3, end: Vec3) -> Vec<RayHit> {
        let mut hits = Vec::new();

        self.arena.cast_walls(start, end, &mut hits);

        for (i, obstacle) in self.arena.obstacles.iter().enumerate() {
            if let Some((t, point, normal)) =
                Arena::cast_sphere(start, end, obstacle.center, obstacle.radius)
            {
                hits.push(RayHit {
                    body: HitBody::Obstacle(ObstacleId(i as u32)),
                    point,
                    normal,
                    fraction: t,
                });
            }
        }

        for (i, boid) in self.boids.iter().enumerate() {
            let id = AgentId(i as u32);
            if id == self.skip {
                continue;
            }
            if let Some((t, point, normal)) =
                Arena::cast_sphere(start, end, boid.position, self.arena.boid_radius)
            {
                hits.push(RayHit {
                    body: HitBody::Boid(id),
                    point,
                    normal,
                    fraction: t,
                });
            }
        }

        hits
    }
}
