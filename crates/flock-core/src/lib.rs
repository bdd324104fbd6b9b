//! `flock-core` — foundational types for the `rust_flock` boid simulator.
//!
//! This crate is a dependency of every other `flock-*` crate.  It intentionally
//! has no `flock-*` dependencies and minimal external ones (only `glam`,
//! `rand`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `AgentId`, `ObstacleId`                               |
//! | [`frame`]    | `Frame` — position + orthonormal basis, Gram–Schmidt   |
//! | [`snapshot`] | `BoidSnapshot` — immutable per-tick neighbor state    |
//! | [`time`]     | `Tick`, `SimConfig`                                   |
//! | [`tuning`]   | `Tuning`, `ForceWeights`, `WanderParams`              |
//! | [`rng`]      | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]    | `FlockError`, `FlockResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod frame;
pub mod ids;
pub mod rng;
pub mod snapshot;
pub mod time;
pub mod tuning;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FlockError, FlockResult};
pub use frame::Frame;
pub use ids::{AgentId, ObstacleId};
pub use rng::{AgentRng, SimRng};
pub use snapshot::BoidSnapshot;
pub use time::{SimConfig, Tick};
pub use tuning::{ForceKind, ForceWeights, Tuning, WanderParams};
