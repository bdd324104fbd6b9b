//! Fluent builder for constructing a [`Sim`].

use glam::Vec3;

use flock_core::{Frame, SimConfig, Tick, Tuning};
use flock_steer::SteeringState;
use flock_world::Arena;

use crate::{BoidRngs, BoidStore, Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, delta time, …
/// - [`BoidStore`] + [`BoidRngs`] — from [`crate::BoidStoreBuilder`]
/// - [`Arena`] — the bounding box plus obstacles
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                     |
/// |------------------|---------------------------------------------|
/// | `.positions(v)`  | Whatever the store already holds (origin)   |
/// | `.velocities(v)` | Whatever the store already holds (zero)     |
/// | `.collides(v)`   | Whatever the store already holds (all true) |
/// | `.tuning(t)`     | `Tuning::default()` (reference weights)     |
///
/// # Example
///
/// ```rust,ignore
/// let (store, rngs) = BoidStoreBuilder::new(n, seed).build();
/// let mut sim = SimBuilder::new(config, store, rngs, arena)
///     .positions(positions)
///     .tuning(tuning)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    store:      BoidStore,
    rngs:       BoidRngs,
    arena:      Arena,
    positions:  Option<Vec<Vec3>>,
    velocities: Option<Vec<Vec3>>,
    collides:   Option<Vec<bool>>,
    tuning:     Tuning,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, store: BoidStore, rngs: BoidRngs, arena: Arena) -> Self {
        Self {
            config,
            store,
            rngs,
            arena,
            positions:  None,
            velocities: None,
            collides:   None,
            tuning:     Tuning::default(),
        }
    }

    /// Supply the initial position of each boid (must be length `count`).
    ///
    /// Each boid starts with the canonical basis at its position; the first
    /// tick's integration re-derives forward from velocity.
    pub fn positions(mut self, positions: Vec<Vec3>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Supply the initial velocity of each boid (must be length `count`).
    ///
    /// If not called, all boids start at rest and the wander force is what
    /// first sets them moving.
    pub fn velocities(mut self, velocities: Vec<Vec3>) -> Self {
        self.velocities = Some(velocities);
        self
    }

    /// Supply the per-boid collider flag (must be length `count`).
    ///
    /// Boids with `false` never cast rays: their containment and avoidance
    /// forces stay zero, so they will drift through walls and obstacles.
    pub fn collides(mut self, collides: Vec<bool>) -> Self {
        self.collides = Some(collides);
        self
    }

    /// Supply steering parameters.  Validated in [`build`](Self::build).
    pub fn tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let count = self.store.count;
        let mut store = self.store;

        if self.rngs.len() != count {
            return Err(SimError::CountMismatch {
                expected: count,
                got:      self.rngs.len(),
                what:     "per-boid RNGs",
            });
        }

        if let Some(positions) = self.positions {
            if positions.len() != count {
                return Err(SimError::CountMismatch {
                    expected: count,
                    got:      positions.len(),
                    what:     "initial positions",
                });
            }
            for (frame, position) in store.frames.iter_mut().zip(positions) {
                *frame = Frame::at(position);
            }
        }

        if let Some(velocities) = self.velocities {
            if velocities.len() != count {
                return Err(SimError::CountMismatch {
                    expected: count,
                    got:      velocities.len(),
                    what:     "initial velocities",
                });
            }
            store.velocities = velocities;
        }

        if let Some(collides) = self.collides {
            if collides.len() != count {
                return Err(SimError::CountMismatch {
                    expected: count,
                    got:      collides.len(),
                    what:     "collider flags",
                });
            }
            store.collides = collides;
        }

        self.tuning.validate()?;

        Ok(Sim {
            config:   self.config,
            tick:     Tick::ZERO,
            arena:    self.arena,
            store,
            rngs:     self.rngs,
            steering: vec![SteeringState::default(); count],
            tuning:   self.tuning,
        })
    }
}
