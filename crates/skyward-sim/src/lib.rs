//! Simulation engine for SKYWARD.
//!
//! Owns the hecs world and the craft, processes session commands, runs the
//! per-frame systems in fixed order, and produces `SessionSnapshot`s for the
//! presentation layer. Completely headless, enabling deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use skyward_core as core;
