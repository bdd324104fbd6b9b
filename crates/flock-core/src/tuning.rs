//! Steering tuning parameters: force weights, wander geometry, and motion
//! bounds.
//!
//! The engine reads these once per tick and never mutates them, so a
//! simulation can be re-tuned live between ticks without restarting.  All
//! weight fields default to `0.0` — a missing key in a deserialized config
//! behaves as "force disabled", never as an error.

use glam::Vec3;

use crate::{FlockError, FlockResult};

// ── ForceKind ─────────────────────────────────────────────────────────────────

/// The six candidate steering forces, in composition priority order.
///
/// The composer accumulates forces in exactly this order: boundary keeping
/// and threat avoidance are guaranteed their share of the force budget before
/// flocking or wander are even considered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ForceKind {
    Containment,
    Avoidance,
    Separation,
    Alignment,
    Cohesion,
    Wander,
}

impl ForceKind {
    /// All kinds, in composition priority order.
    pub const PRIORITY_ORDER: [ForceKind; 6] = [
        ForceKind::Containment,
        ForceKind::Avoidance,
        ForceKind::Separation,
        ForceKind::Alignment,
        ForceKind::Cohesion,
        ForceKind::Wander,
    ];
}

// ── ForceWeights ──────────────────────────────────────────────────────────────

/// Externally supplied multiplier per steering force.
///
/// `Default` (and any field missing from a deserialized config) is `0.0`:
/// the force is disabled and its inputs are never computed — a zero-weight
/// avoidance force casts no rays.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ForceWeights {
    pub separation:  f32,
    pub alignment:   f32,
    pub cohesion:    f32,
    pub wander:      f32,
    pub containment: f32,
    pub avoidance:   f32,
}

impl ForceWeights {
    /// Look a weight up by kind.
    #[inline]
    pub fn get(&self, kind: ForceKind) -> f32 {
        match kind {
            ForceKind::Containment => self.containment,
            ForceKind::Avoidance   => self.avoidance,
            ForceKind::Separation  => self.separation,
            ForceKind::Alignment   => self.alignment,
            ForceKind::Cohesion    => self.cohesion,
            ForceKind::Wander      => self.wander,
        }
    }

    /// The reference weight set the simulator was hand-tuned with.
    pub fn reference() -> Self {
        Self {
            separation:  1.029,
            alignment:   0.260,
            cohesion:    1.016,
            wander:      0.247,
            containment: 1.10,
            avoidance:   0.72,
        }
    }
}

// ── WanderParams ──────────────────────────────────────────────────────────────

/// Geometry of the wander generator's projected sphere.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WanderParams {
    /// Radius of the virtual sphere the wander target lives on.
    pub radius: f32,
    /// Radius of the per-tick jitter sphere.
    pub jitter: f32,
    /// How far ahead of the agent (along forward) the sphere is projected.
    pub forward_projection: f32,
}

impl Default for WanderParams {
    fn default() -> Self {
        Self {
            radius:             0.625,
            jitter:             0.025,
            forward_projection: 5.0,
        }
    }
}

// ── Tuning ────────────────────────────────────────────────────────────────────

/// All externally configurable steering parameters, read fresh every tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tuning {
    pub weights: ForceWeights,
    pub wander:  WanderParams,

    /// Search radius for flocking neighbors; also the length of the six
    /// containment rays.
    pub neighbor_radius: f32,

    /// Length of the forward obstacle-detection ray and of each avoid-probe
    /// ray.
    pub lookahead: f32,

    /// Desired speed for seek-style forces and the velocity magnitude cap.
    pub max_speed: f32,

    /// Velocity magnitude floor (zero velocity is exempt).
    pub min_speed: f32,

    /// Symmetric per-axis force bound; `|max_force|` is also the budget for
    /// the priority accumulation.
    pub max_force: Vec3,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            weights:         ForceWeights::reference(),
            wander:          WanderParams::default(),
            neighbor_radius: 4.0,
            lookahead:       2.0,
            max_speed:       2.0,
            min_speed:       0.0,
            max_force:       Vec3::splat(1.0),
        }
    }
}

impl Tuning {
    /// Reject configurations the engine cannot run safely.
    ///
    /// A zero wander radius or jitter would make the wander generator's
    /// direction normalization undefined, so both must be strictly positive
    /// whenever the wander weight is nonzero.  Weights that merely make
    /// `max_force` unreachable are not validated here — the composer clamps
    /// defensively every tick regardless.
    pub fn validate(&self) -> FlockResult<()> {
        if self.weights.wander != 0.0 {
            if self.wander.radius <= 0.0 {
                return Err(FlockError::Config(
                    "wander radius must be > 0 when wander is enabled".into(),
                ));
            }
            if self.wander.jitter <= 0.0 {
                return Err(FlockError::Config(
                    "wander jitter must be > 0 when wander is enabled".into(),
                ));
            }
        }
        if self.max_speed <= 0.0 {
            return Err(FlockError::Config("max_speed must be > 0".into()));
        }
        if self.min_speed < 0.0 || self.min_speed > self.max_speed {
            return Err(FlockError::Config(
                "min_speed must lie in [0, max_speed]".into(),
            ));
        }
        if self.neighbor_radius <= 0.0 {
            return Err(FlockError::Config("neighbor_radius must be > 0".into()));
        }
        if self.lookahead <= 0.0 {
            return Err(FlockError::Config("lookahead must be > 0".into()));
        }
        if self.max_force.cmplt(Vec3::ZERO).any() {
            return Err(FlockError::Config(
                "max_force components must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
