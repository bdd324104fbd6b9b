//! Core agent storage: `BoidStore` (SoA data) and `BoidRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The parallel compute phase needs `&mut BoidRngs` (exclusive mutable access
//! to each agent's RNG) and `&BoidStore` (shared read access to world state)
//! simultaneously.  Rust's borrow checker forbids this if both live inside a
//! single struct.  Keeping RNGs in a separate `BoidRngs` struct resolves the
//! conflict cleanly.

use glam::Vec3;

use flock_core::{AgentId, AgentRng, BoidSnapshot, Frame};

// ── BoidRngs ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`BoidStore`] to enable
/// simultaneous `&mut BoidRngs` + `&BoidStore` borrows in the compute phase.
///
/// `BoidRngs` is `Send` but intentionally not `Sync` — per-agent RNG state
/// must never be shared between threads.  Rayon's `par_iter_mut()` handles
/// the exclusive-per-thread access pattern.
pub struct BoidRngs {
    pub inner: Vec<AgentRng>,
}

impl BoidRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── BoidStore ─────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all boid state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.frames[agent.index()].position;  // O(1), cache-friendly
/// ```
pub struct BoidStore {
    /// Number of boids.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Position + orientation basis per boid.
    pub frames: Vec<Frame>,

    /// Current linear velocity per boid; mutated only by the apply phase.
    pub velocities: Vec<Vec3>,

    /// Whether the boid has a collider.  `false` means ray queries are never
    /// made for it and its containment/avoidance forces are always zero.
    pub collides: Vec<bool>,
}

impl BoidStore {
    /// `true` if there are no boids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Capture the neighbor-visible state of every boid — the immutable
    /// snapshot all reads go against for one tick.
    pub fn snapshot(&self) -> Vec<BoidSnapshot> {
        self.frames
            .iter()
            .zip(&self.velocities)
            .map(|(frame, &velocity)| BoidSnapshot { position: frame.position, velocity })
            .collect()
    }
}

// ── BoidStoreBuilder ──────────────────────────────────────────────────────────

/// Fluent builder for [`BoidStore`] + [`BoidRngs`].
///
/// All arrays are pre-allocated at construction time so later field writes
/// (initial placement, per-boid flags) are simple indexed assignments, not
/// pushes.
pub struct BoidStoreBuilder {
    count: usize,
    seed:  u64,
}

impl BoidStoreBuilder {
    /// Create a builder for `count` boids using `seed` as the global RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }

    /// Construct `BoidStore` and `BoidRngs`.
    ///
    /// All boids start at the origin with the canonical basis, zero velocity,
    /// and a collider.  Applications write actual initial state directly to
    /// the `pub` fields of the returned store.
    pub fn build(self) -> (BoidStore, BoidRngs) {
        let store = BoidStore {
            count:      self.count,
            frames:     vec![Frame::default(); self.count],
            velocities: vec![Vec3::ZERO; self.count],
            collides:   vec![true; self.count],
        };
        let rngs = BoidRngs::new(self.count, self.seed);
        (store, rngs)
    }
}
