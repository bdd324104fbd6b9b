//! `flock-world` — environment queries for the `rust_flock` boid simulator.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`ray`]   | `Ray`, `RayHit`, `HitBody`/`BodyKind`, the `RayCaster` trait  |
//! | [`arena`] | `Arena` (AABB walls + sphere obstacles), `ArenaView`          |
//! | [`error`] | `WorldError`, `WorldResult`                                   |
//!
//! # Design notes
//!
//! The steering engine only ever talks to the [`RayCaster`] trait; the
//! analytic [`Arena`] is one implementation of it.  Hit lists are returned as
//! owned `Vec<RayHit>` values scoped to the call — no hit record outlives the
//! cast that produced it.

pub mod arena;
pub mod error;
pub mod ray;

#[cfg(test)]
mod tests;

pub use arena::{Arena, ArenaView, Obstacle};
pub use error::{WorldError, WorldResult};
pub use ray::{BodyKind, BoxFace, HitBody, Ray, RayCaster, RayHit};
