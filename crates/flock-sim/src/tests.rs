//! Integration tests for flock-sim.

use glam::Vec3;

use flock_core::{ForceWeights, SimConfig, Tick, Tuning};
use flock_world::Arena;

use crate::{BoidStoreBuilder, NoopObserver, SimBuilder, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        total_ticks,
        delta_time: 1.0 / 60.0,
        seed: 42,
        num_threads: Some(1),
        snapshot_interval_ticks: 0,
    }
}

fn small_store(n: usize) -> (crate::BoidStore, crate::BoidRngs) {
    BoidStoreBuilder::new(n, 42).build()
}

fn box_arena(half_extent: f32) -> Arena {
    Arena::new(half_extent).unwrap()
}

/// Tuning with only the named weights enabled; everything else zero.
fn tuning_with(weights: ForceWeights) -> Tuning {
    Tuning { weights, ..Tuning::default() }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_successfully_with_defaults() {
        let (store, rngs) = small_store(3);
        let sim = SimBuilder::new(test_config(10), store, rngs, box_arena(10.0))
            .build()
            .unwrap();
        assert_eq!(sim.store.count, 3);
        assert_eq!(sim.steering.len(), 3);
        assert_eq!(sim.tick, Tick::ZERO);
    }

    #[test]
    fn position_count_mismatch_errors() {
        let (store, rngs) = small_store(3);
        let result = SimBuilder::new(test_config(10), store, rngs, box_arena(10.0))
            .positions(vec![Vec3::ZERO; 2]) // wrong length
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn velocity_count_mismatch_errors() {
        let (store, rngs) = small_store(3);
        let result = SimBuilder::new(test_config(10), store, rngs, box_arena(10.0))
            .velocities(vec![Vec3::Z; 4]) // wrong length
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn collides_count_mismatch_errors() {
        let (store, rngs) = small_store(2);
        let result = SimBuilder::new(test_config(10), store, rngs, box_arena(10.0))
            .collides(vec![true]) // wrong length
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn invalid_tuning_rejected() {
        let mut tuning = Tuning::default();
        tuning.wander.radius = 0.0; // wander enabled by default weights
        let (store, rngs) = small_store(1);
        let result = SimBuilder::new(test_config(10), store, rngs, box_arena(10.0))
            .tuning(tuning)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn positions_land_in_frames() {
        let (store, rngs) = small_store(2);
        let positions = vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(-4.0, 0.0, 4.0)];
        let sim = SimBuilder::new(test_config(10), store, rngs, box_arena(10.0))
            .positions(positions.clone())
            .build()
            .unwrap();
        assert_eq!(sim.store.frames[0].position, positions[0]);
        assert_eq!(sim.store.frames[1].position, positions[1]);
    }
}

// ── Basic run ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn runs_to_end_tick() {
        let (store, rngs) = small_store(5);
        let mut sim = SimBuilder::new(test_config(10), store, rngs, box_arena(10.0))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.tick, Tick(10));
    }

    #[test]
    fn run_ticks_advances_clock() {
        let (store, rngs) = small_store(2);
        let mut sim = SimBuilder::new(test_config(100), store, rngs, box_arena(10.0))
            .build()
            .unwrap();
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.tick, Tick(5));
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.tick, Tick(8));
    }

    /// Observer that counts hook invocations.
    #[derive(Default)]
    struct HookCounter {
        starts:    usize,
        ends:      usize,
        snapshots: usize,
        sim_ends:  usize,
    }
    impl SimObserver for HookCounter {
        fn on_tick_start(&mut self, _t: Tick) { self.starts += 1; }
        fn on_tick_end(&mut self, _t: Tick, _s: &crate::BoidStore) { self.ends += 1; }
        fn on_snapshot(&mut self, _t: Tick, _s: &crate::BoidStore) { self.snapshots += 1; }
        fn on_sim_end(&mut self, _t: Tick) { self.sim_ends += 1; }
    }

    #[test]
    fn observer_called_correct_number_of_times() {
        let (store, rngs) = small_store(1);
        let mut sim = SimBuilder::new(test_config(7), store, rngs, box_arena(10.0))
            .build()
            .unwrap();
        let mut obs = HookCounter::default();
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.starts, 7);
        assert_eq!(obs.ends, 7);
        assert_eq!(obs.sim_ends, 1);
        assert_eq!(obs.snapshots, 0, "interval 0 disables snapshots");
    }

    #[test]
    fn snapshot_hook_fires_at_interval() {
        let mut config = test_config(10);
        config.snapshot_interval_ticks = 3;
        let (store, rngs) = small_store(1);
        let mut sim = SimBuilder::new(config, store, rngs, box_arena(10.0))
            .build()
            .unwrap();
        let mut obs = HookCounter::default();
        sim.run(&mut obs).unwrap();
        // Ticks 0, 3, 6, 9.
        assert_eq!(obs.snapshots, 4);
    }

    #[test]
    fn same_seed_same_trajectories() {
        let run = || {
            let (store, rngs) = small_store(8);
            let positions: Vec<Vec3> =
                (0..8).map(|i| Vec3::new(i as f32 - 4.0, 0.0, 0.5 * i as f32)).collect();
            let mut sim = SimBuilder::new(test_config(50), store, rngs, box_arena(10.0))
                .positions(positions)
                .build()
                .unwrap();
            sim.run(&mut NoopObserver).unwrap();
            (sim.store.frames.clone(), sim.store.velocities.clone())
        };

        let (frames_a, velocities_a) = run();
        let (frames_b, velocities_b) = run();
        assert_eq!(frames_a, frames_b);
        assert_eq!(velocities_a, velocities_b);
    }
}

// ── Motion invariants ─────────────────────────────────────────────────────────

#[cfg(test)]
mod motion_tests {
    use super::*;

    #[test]
    fn velocities_stay_bounded_and_frames_orthonormal() {
        let (store, rngs) = small_store(10);
        let positions: Vec<Vec3> =
            (0..10).map(|i| Vec3::new((i % 5) as f32 - 2.0, 1.0, (i / 5) as f32 - 0.5)).collect();
        let mut sim = SimBuilder::new(test_config(300), store, rngs, box_arena(10.0))
            .positions(positions)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let max_speed = sim.tuning().max_speed;
        for (frame, velocity) in sim.store.frames.iter().zip(&sim.store.velocities) {
            assert!(velocity.is_finite());
            assert!(
                velocity.length() <= max_speed + 1e-4,
                "|v| = {} exceeds max_speed {max_speed}",
                velocity.length()
            );
            assert!(frame.position.is_finite());
            assert!((frame.forward.length() - 1.0).abs() < 1e-4);
            assert!((frame.up.length() - 1.0).abs() < 1e-4);
            assert!((frame.right.length() - 1.0).abs() < 1e-4);
            assert!(frame.forward.dot(frame.up).abs() < 1e-4);
            assert!(frame.forward.dot(frame.right).abs() < 1e-4);
        }
    }

    #[test]
    fn containment_turns_a_boid_back_from_the_wall() {
        // One boid heading straight at the +Z wall with only containment
        // enabled.  The inward push must reverse it before it gets far past
        // the boundary.
        let weights = ForceWeights { containment: 1.1, ..ForceWeights::default() };
        let (store, rngs) = small_store(1);
        let mut sim = SimBuilder::new(test_config(300), store, rngs, box_arena(5.0))
            .positions(vec![Vec3::ZERO])
            .velocities(vec![Vec3::new(0.0, 0.0, 2.0)])
            .tuning(tuning_with(weights))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let position = sim.store.frames[0].position;
        assert!(
            position.z < 5.0 + 1.0,
            "boid escaped containment: z = {}",
            position.z
        );
    }

    #[test]
    fn non_colliding_boid_drifts_through_the_wall() {
        let weights = ForceWeights { containment: 1.1, ..ForceWeights::default() };
        let (store, rngs) = small_store(1);
        let mut sim = SimBuilder::new(test_config(400), store, rngs, box_arena(5.0))
            .positions(vec![Vec3::ZERO])
            .velocities(vec![Vec3::new(0.0, 0.0, 2.0)])
            .collides(vec![false])
            .tuning(tuning_with(weights))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        // 400 ticks at 2 u/s and 1/60 s/tick is ~13.3 units of travel.
        let position = sim.store.frames[0].position;
        assert!(
            position.z > 5.0,
            "boid without a collider should ignore the wall: z = {}",
            position.z
        );
    }

    #[test]
    fn cohesion_pulls_a_pair_together() {
        // Two stationary boids within neighbor range, cohesion only.
        let weights = ForceWeights { cohesion: 1.0, ..ForceWeights::default() };
        let start = [Vec3::new(-1.5, 0.0, 0.0), Vec3::new(1.5, 0.0, 0.0)];
        let (store, rngs) = small_store(2);
        let mut sim = SimBuilder::new(test_config(30), store, rngs, box_arena(20.0))
            .positions(start.to_vec())
            .tuning(tuning_with(weights))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let gap = (sim.store.frames[0].position - sim.store.frames[1].position).length();
        assert!(gap < 3.0, "pair should close in: gap = {gap}");
    }

    #[test]
    fn all_zero_weights_leave_state_untouched_except_integration() {
        // No forces at all: a moving boid coasts in a straight line.
        let (store, rngs) = small_store(1);
        let mut sim = SimBuilder::new(test_config(60), store, rngs, box_arena(50.0))
            .positions(vec![Vec3::ZERO])
            .velocities(vec![Vec3::new(1.0, 0.0, 0.0)])
            .tuning(tuning_with(ForceWeights::default()))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let position = sim.store.frames[0].position;
        assert!((position - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-4);
        assert_eq!(sim.store.velocities[0], Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn live_retune_takes_effect_next_tick() {
        let (store, rngs) = small_store(1);
        let mut sim = SimBuilder::new(test_config(100), store, rngs, box_arena(50.0))
            .positions(vec![Vec3::ZERO])
            .velocities(vec![Vec3::new(2.0, 0.0, 0.0)])
            .tuning(tuning_with(ForceWeights::default()))
            .build()
            .unwrap();

        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.store.velocities[0].length(), 2.0);

        // Halve the speed cap mid-run; the very next tick clamps to it.
        sim.tuning_mut().max_speed = 1.0;
        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert!((sim.store.velocities[0].length() - 1.0).abs() < 1e-5);
    }
}
