//! Entity data for the simulation world.
//!
//! Sentries and projectiles are hecs components (plain data structs, logic in
//! systems). The craft is a single owned struct on the engine rather than an
//! entity: exactly one exists per session and exactly one system writes it
//! per frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The player/autopilot-controlled agent. Owned exclusively by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Craft {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Bounded [0, shield_max]. Never negative; zero ends the session.
    pub shields: f32,
    /// Bounded [0, boost_max].
    pub boost_reserve: f32,
    pub is_boosting: bool,
}

impl Craft {
    pub fn altitude(&self) -> f32 {
        self.position.y
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// A hostile agent that fires projectiles at the craft. One of a fixed-size
/// roster created at session start; reset re-rolls its cooldown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentry {
    /// Fixed anchor the hover oscillation swings around.
    pub anchor: Vec3,
    /// Per-sentry phase offset so the roster does not bob in unison.
    pub hover_phase: f32,
    /// Hook for a future kill rule; nothing in the core clears it today, but
    /// dead sentries are already skipped by targeting and threat weighting.
    pub alive: bool,
    /// Elapsed-time stamp of the last shot (seconds).
    pub last_shot_secs: f32,
    /// Individually rolled minimum interval between shots (seconds).
    pub shot_interval_secs: f32,
}

/// A projectile in flight. Created by sentry fire decisions, destroyed on
/// craft collision, max-range expiry, or falling below the ground plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Unit direction of travel, fixed at spawn.
    pub direction: Vec3,
    pub speed: f32,
    pub distance_travelled: f32,
    /// Near-miss already credited — prevents double-counting an evade across
    /// the frames a projectile spends inside the evade band.
    pub counted: bool,
}
