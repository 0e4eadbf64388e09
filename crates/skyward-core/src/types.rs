//! Fundamental simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// 3D position in arena space (world units).
/// x = East, z = South, y = Up (altitude).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Distance to another position (3D).
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }

    /// Altitude above the ground plane.
    pub fn altitude(&self) -> f32 {
        self.0.y
    }
}

/// Simulation time tracking. The frame interval is variable (supplied by the
/// host each frame and clamped by the engine), so elapsed time accumulates
/// real deltas rather than a fixed tick length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Simulated frame count (increments by 1 each active frame).
    pub frame: u64,
    /// Elapsed simulation time in seconds. Frozen while paused.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}

/// Pre-clamp P/I/D term magnitudes from the most recent controller update.
/// Diagnostic only; the X axis is published in the session snapshot by
/// convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PidTerms {
    pub p: f32,
    pub i: f32,
    pub d: f32,
}
