//! Ray queries: hit records and the `RayCaster` trait.

use glam::Vec3;

use flock_core::{AgentId, ObstacleId};

// ── Ray ───────────────────────────────────────────────────────────────────────

/// A finite ray segment from `start` to `end`.
///
/// Hit fractions are normalized along this segment: 0 = start, 1 = end.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub start: Vec3,
    pub end:   Vec3,
}

impl Ray {
    #[inline]
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// The point at `fraction` along the segment.
    #[inline]
    pub fn at(&self, fraction: f32) -> Vec3 {
        self.start + (self.end - self.start) * fraction
    }
}

// ── Hit identity ──────────────────────────────────────────────────────────────

/// One of the six container walls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoxFace {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl BoxFace {
    /// The wall's inward-pointing unit normal (toward the arena center).
    #[inline]
    pub fn inward_normal(self) -> Vec3 {
        match self {
            BoxFace::PosX => -Vec3::X,
            BoxFace::NegX => Vec3::X,
            BoxFace::PosY => -Vec3::Y,
            BoxFace::NegY => Vec3::Y,
            BoxFace::PosZ => -Vec3::Z,
            BoxFace::NegZ => Vec3::Z,
        }
    }
}

/// What a ray hit.  Replaces entity-type tags with a plain enum: callers
/// match on the hit's [`kind`][HitBody::kind] and still have the concrete
/// identity when they need it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HitBody {
    /// A container boundary wall.
    Wall(BoxFace),
    /// A static obstacle sphere.
    Obstacle(ObstacleId),
    /// Another boid.
    Boid(AgentId),
}

/// Coarse classification used by the steering engine's hit scans.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Container,
    Obstacle,
    Boid,
}

impl HitBody {
    #[inline]
    pub fn kind(&self) -> BodyKind {
        match self {
            HitBody::Wall(_)     => BodyKind::Container,
            HitBody::Obstacle(_) => BodyKind::Obstacle,
            HitBody::Boid(_)     => BodyKind::Boid,
        }
    }
}

// ── RayHit ────────────────────────────────────────────────────────────────────

/// One intersection along a cast segment.
///
/// A single cast may produce several hits; they are delivered unordered and
/// callers scan for the bodies they care about.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    pub body:     HitBody,
    /// World-space intersection point.
    pub point:    Vec3,
    /// Unit surface normal at the intersection.
    pub normal:   Vec3,
    /// Normalized distance along the segment, in `[0, 1]`.
    pub fraction: f32,
}

// ── RayCaster ─────────────────────────────────────────────────────────────────

/// Synchronous ray-query provider.
///
/// An agent without a collider simply has no `RayCaster`; the steering engine
/// treats that as "this agent cannot collide" and resolves its containment
/// and avoidance forces to zero.
pub trait RayCaster {
    /// Cast one segment and return every intersection (unordered).
    fn cast(&self, start: Vec3, end: Vec3) -> Vec<RayHit>;

    /// Cast a batch of segments.  The default forwards to [`cast`][Self::cast]
    /// one segment at a time; implementations with a cheaper batch path may
    /// override it.
    fn cast_many(&self, rays: &[Ray]) -> Vec<Vec<RayHit>> {
        rays.iter().map(|r| self.cast(r.start, r.end)).collect()
    }
}
