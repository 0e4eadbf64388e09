//! Systems that advance the simulation world each frame.
//!
//! Each system is a function over explicit state — the world, the craft, the
//! tuning — called by the engine in a fixed sequential order. No system owns
//! state and no two systems write the same field in one frame.

pub mod autopilot;
pub mod flight;
pub mod projectile;
pub mod sentry;
pub mod snapshot;
