//! The `Sim` struct and its tick loop.

use flock_core::{AgentId, AgentRng, BoidSnapshot, SimConfig, Tick, Tuning};
use flock_steer::{SteeringContext, SteeringState, StepOutput, step};
use flock_world::{Arena, RayCaster};

use crate::{BoidRngs, BoidStore, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim` holds all simulation state and drives the three-phase tick loop:
///
/// 1. **Snapshot phase** (sequential): every agent's `(position, velocity)`
///    is captured into an immutable `Vec<BoidSnapshot>`.
/// 2. **Compute phase** (optionally parallel with the `parallel` feature):
///    [`flock_steer::step`] runs for each agent against the snapshot,
///    producing a [`StepOutput`] buffer.  Agents without a collider get no
///    ray caster, so their containment and avoidance forces are zero.
/// 3. **Apply phase** (sequential, ascending `AgentId`): the buffer is
///    written back into the store.
///
/// All neighbor reads go through the snapshot, so results are independent of
/// agent processing order — the compute phase needs no locks.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (total ticks, seed, delta time, …).
    pub config: SimConfig,

    /// The current tick.  Starts at zero; advances after each tick completes.
    pub tick: Tick,

    /// The bounding box and its obstacles.  All ray queries resolve here.
    pub arena: Arena,

    /// Boid state (SoA arrays).  Steering reads this through the per-tick
    /// snapshot.
    pub store: BoidStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: BoidRngs,

    /// Per-agent persistent steering state (wander target, cached escape
    /// direction), indexed by `AgentId`.
    pub steering: Vec<SteeringState>,

    pub(crate) tuning: Tuning,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.tick;
            if now >= self.config.end_tick() {
                break;
            }

            observer.on_tick_start(now);
            self.process_tick(now);
            observer.on_tick_end(now, &self.store);
            if self.config.snapshot_interval_ticks > 0
                && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
            {
                observer.on_snapshot(now, &self.store);
            }

            self.tick.advance();
        }
        observer.on_sim_end(self.tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.tick;
            observer.on_tick_start(now);
            self.process_tick(now);
            observer.on_tick_end(now, &self.store);
            if self.config.snapshot_interval_ticks > 0
                && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
            {
                observer.on_snapshot(now, &self.store);
            }
            self.tick.advance();
        }
        Ok(())
    }

    /// Current steering parameters.
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Mutable access to steering parameters for live retuning.
    ///
    /// Values are read fresh at the start of every tick, so a change made
    /// between ticks takes effect on the very next one.  Callers are
    /// responsible for keeping the values valid ([`Tuning::validate`]) —
    /// the tick loop does not re-check.
    pub fn tuning_mut(&mut self) -> &mut Tuning {
        &mut self.tuning
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) {
        // ── Phase 1: snapshot ─────────────────────────────────────────────
        let snapshot = self.store.snapshot();

        // ── Phase 2: compute ──────────────────────────────────────────────
        let outputs = self.compute_steps(now, &snapshot);

        // ── Phase 3: apply ────────────────────────────────────────────────
        //
        // Plain indexed writes in ascending AgentId order.  No agent's output
        // depends on another's, so this is a straight buffer copy.
        for (i, out) in outputs.into_iter().enumerate() {
            self.store.frames[i] = out.frame;
            self.store.velocities[i] = out.velocity;
        }
    }

    /// Run the steering engine for every agent against the tick snapshot.
    ///
    /// With the `parallel` Cargo feature the per-agent steps run on Rayon's
    /// thread pool; the split borrows below (`steering` + `rngs` mutable,
    /// everything else shared) are what make that possible without locks.
    fn compute_steps(&mut self, now: Tick, snapshot: &[BoidSnapshot]) -> Vec<StepOutput> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let arena    = &self.arena;
        let store    = &self.store;
        let tuning   = &self.tuning;
        let dt       = self.config.delta_time;
        let steering = &mut self.steering;
        let rngs     = &mut self.rngs;

        let step_one = |i: usize, state: &mut SteeringState, rng: &mut AgentRng| {
            let agent = AgentId(i as u32);
            let view;
            // A boid without a collider never casts rays, so its containment
            // and avoidance forces stay zero.
            let caster: Option<&dyn RayCaster> = if store.collides[i] {
                view = arena.view(snapshot, agent);
                Some(&view)
            } else {
                None
            };
            let ctx = SteeringContext::new(now, dt, tuning, snapshot, caster);
            step(agent, &store.frames[i], store.velocities[i], state, &ctx, rng)
        };

        #[cfg(not(feature = "parallel"))]
        {
            steering
                .iter_mut()
                .zip(rngs.inner.iter_mut())
                .enumerate()
                .map(|(i, (state, rng))| step_one(i, state, rng))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            steering
                .par_iter_mut()
                .zip(rngs.inner.par_iter_mut())
                .enumerate()
                .map(|(i, (state, rng))| step_one(i, state, rng))
                .collect()
        }
    }
}
