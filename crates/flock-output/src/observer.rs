//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use flock_core::{SimConfig, Tick};
use flock_sim::{BoidStore, SimObserver};

use crate::OutputError;
use crate::row::{BoidSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;

/// A [`SimObserver`] that writes boid snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    delta_time: f32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for sim-time
    /// conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            delta_time: config.delta_time,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, store: &BoidStore) {
        let mean_speed = if store.is_empty() {
            0.0
        } else {
            store.velocities.iter().map(|v| v.length()).sum::<f32>() / store.count as f32
        };
        let row = TickSummaryRow {
            tick:          tick.0,
            sim_time_secs: tick.0 as f64 * self.delta_time as f64,
            mean_speed,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, store: &BoidStore) {
        let rows: Vec<BoidSnapshotRow> = store
            .frames
            .iter()
            .zip(&store.velocities)
            .enumerate()
            .map(|(i, (frame, velocity))| BoidSnapshotRow {
                agent_id: i as u32,
                tick:     tick.0,
                x:        frame.position.x,
                y:        frame.position.y,
                z:        frame.position.z,
                vx:       velocity.x,
                vy:       velocity.y,
                vz:       velocity.z,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
