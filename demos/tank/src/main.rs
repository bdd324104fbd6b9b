//! tank — a school of boids in a box, the smallest demo for rust_flock.
//!
//! Simulates 25 boids wandering and flocking inside a 20-unit glass tank
//! with two spherical rocks.  Per-tick summaries and periodic position
//! snapshots land in `output/tank/` as CSV.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use glam::Vec3;

use flock_core::{SimConfig, SimRng, Tick, Tuning};
use flock_output::{CsvWriter, OutputWriter, SimOutputObserver};
use flock_sim::{BoidStore, BoidStoreBuilder, SimBuilder, SimObserver};
use flock_world::Arena;

// ── Constants ─────────────────────────────────────────────────────────────────

const BOID_COUNT:              usize = 25;
const SEED:                    u64   = 42;
const TANK_HALF_EXTENT:        f32   = 10.0;
const DELTA_TIME:              f32   = 1.0 / 60.0; // 60 ticks = 1 simulated second
const TOTAL_TICKS:             u64   = 2_000;      // ~33 simulated seconds
const SNAPSHOT_INTERVAL_TICKS: u64   = 10;

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, store: &BoidStore) {
        self.summary_rows += 1;
        self.inner.on_tick_end(tick, store);
    }

    fn on_snapshot(&mut self, tick: Tick, store: &BoidStore) {
        self.snapshot_rows += store.count;
        self.inner.on_snapshot(tick, store);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== tank — rust_flock boid simulator ===");
    println!("Boids: {BOID_COUNT}  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Build the arena: a box with two rocks near the floor.
    let mut arena = Arena::new(TANK_HALF_EXTENT)?;
    arena.add_obstacle(Vec3::new(-4.0, -7.0, 2.0), 2.5)?;
    arena.add_obstacle(Vec3::new(5.0, -8.0, -3.0), 1.5)?;

    // 2. Build the boid store and scatter initial positions in the inner half
    //    of the tank so nobody starts inside a wall or rock.
    let (store, rngs) = BoidStoreBuilder::new(BOID_COUNT, SEED).build();
    let mut placement = SimRng::new(SEED);
    let positions: Vec<Vec3> = (0..BOID_COUNT)
        .map(|_| placement.point_in_cube(TANK_HALF_EXTENT * 0.5))
        .collect();

    // 3. Sim config and the hand-tuned reference steering parameters.
    let config = SimConfig {
        total_ticks:             TOTAL_TICKS,
        delta_time:              DELTA_TIME,
        seed:                    SEED,
        num_threads:             None, // all logical cores
        snapshot_interval_ticks: SNAPSHOT_INTERVAL_TICKS,
    };
    let tuning = Tuning::default();
    println!(
        "Tank: ±{TANK_HALF_EXTENT} units, {} obstacles  |  snapshot every {SNAPSHOT_INTERVAL_TICKS} ticks",
        arena.obstacles().len()
    );
    println!();

    // 4. Build sim.
    let mut sim = SimBuilder::new(config.clone(), store, rngs, arena)
        .positions(positions)
        .tuning(tuning)
        .build()?;

    // 5. Set up output.
    std::fs::create_dir_all("output/tank")?;
    let writer = CsvWriter::new(Path::new("output/tank"))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer, &config));

    // 6. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 7. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  boid_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv : {} rows", obs.summary_rows);
    println!();

    // 8. Final flock stats.
    let centroid = sim.store.frames.iter().map(|f| f.position).sum::<Vec3>() / BOID_COUNT as f32;
    let mean_speed =
        sim.store.velocities.iter().map(|v| v.length()).sum::<f32>() / BOID_COUNT as f32;
    println!("Centroid:   ({:.2}, {:.2}, {:.2})", centroid.x, centroid.y, centroid.z);
    println!("Mean speed: {mean_speed:.3} u/s (cap {})", sim.tuning().max_speed);

    println!();
    println!("{:<6} {:<26} {:<10}", "Boid", "Position", "Speed");
    println!("{}", "-".repeat(44));
    for i in 0..BOID_COUNT {
        let p = sim.store.frames[i].position;
        println!(
            "{:<6} {:<26} {:<10.3}",
            i,
            format!("({:.2}, {:.2}, {:.2})", p.x, p.y, p.z),
            sim.store.velocities[i].length(),
        );
    }

    Ok(())
}
