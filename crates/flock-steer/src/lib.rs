//! `flock-steer` — the per-agent steering and decision engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`seek`]     | `seek`/`flee` velocity-matching primitives                       |
//! | [`wander`]   | `WanderState` + projected-sphere wander force                    |
//! | [`flock`]    | One-pass separation/alignment/cohesion aggregation               |
//! | [`avoid`]    | Raycast containment and collision avoidance                      |
//! | [`composer`] | Priority-budgeted force composition and motion integration       |
//! | [`context`]  | `SteeringContext<'a>` — read-only tick inputs shared by all agents |
//!
//! # Design notes
//!
//! Every function here is pure with respect to the world: reads go through
//! [`SteeringContext`] (an immutable snapshot captured at tick start plus the
//! tuning handle and an optional ray-query provider), and the only mutable
//! inputs are the calling agent's own [`SteeringState`] and RNG.  The tick
//! loop in `flock-sim` writes the returned frame/velocity into a next-state
//! buffer, so results never depend on the order agents are processed in.

pub mod avoid;
pub mod composer;
pub mod context;
pub mod flock;
pub mod seek;
pub mod wander;


pub use avoid::{AvoidState, avoidance_force, containment_force, probe_directions};
pub use composer::{SteeringState, StepOutput, compose_budgeted, step};
pub use context::SteeringContext;
pub use flock::{FlockForces, flock_forces};
pub use seek::{flee, seek};
pub use wander::{WanderState, wander_force};
