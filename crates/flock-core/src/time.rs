//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter; one tick integrates
//! `delta_time` simulated seconds of motion.  Using an integer tick as the
//! canonical time unit keeps run-length arithmetic exact; the float
//! `delta_time` only ever scales the position integration step.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at 60 ticks per simulated second a u64
/// lasts far longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Advance to the next tick.
    #[inline]
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built in the application crate (or loaded from a TOML/JSON file
/// with the `serde` feature) and passed to [`SimBuilder`].
///
/// [`SimBuilder`]: ../../flock_sim/struct.SimBuilder.html
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Simulated seconds integrated per tick.  1/60 gives the usual
    /// fixed-step feel; larger values trade fidelity for throughput.
    pub delta_time: f32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count for the `parallel` feature.  `None` uses all
    /// logical cores.
    pub num_threads: Option<usize>,

    /// Invoke the observer's snapshot hook every N ticks.  0 disables
    /// snapshots entirely.
    pub snapshot_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Simulated seconds elapsed at `tick`.
    #[inline]
    pub fn elapsed_secs(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.delta_time as f64
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:             1,
            delta_time:              1.0 / 60.0,
            seed:                    0,
            num_threads:             None,
            snapshot_interval_ticks: 0,
        }
    }
}
