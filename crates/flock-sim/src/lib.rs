//! `flock-sim` — the tick-loop orchestrator for the `rust_flock` boid
//! simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|-----------------------------------------------------------|
//! | [`store`]    | `BoidStore` (SoA arrays), `BoidRngs`, `BoidStoreBuilder` |
//! | [`sim`]      | `Sim` and its three-phase tick loop                      |
//! | [`builder`]  | `SimBuilder` — validated construction                    |
//! | [`observer`] | `SimObserver` hooks, `NoopObserver`                      |
//! | [`error`]    | `SimError`, `SimResult<T>`                               |
//!
//! # The tick loop
//!
//! 1. **Snapshot phase**: capture every agent's `(position, velocity)` into
//!    an immutable `Vec<BoidSnapshot>`.
//! 2. **Compute phase** (optionally parallel with the `parallel` feature):
//!    run the steering engine for every agent against the snapshot; results
//!    land in a next-state buffer.
//! 3. **Apply phase** (sequential): write the buffer back into the store.
//!
//! Classic double-buffering: later-processed agents never see neighbors that
//! already integrated this tick, so results are independent of iteration
//! order — which is also exactly what makes the parallel compute phase safe
//! without locks.

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use store::{BoidRngs, BoidStore, BoidStoreBuilder};
