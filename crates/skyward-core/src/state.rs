//! Session snapshot — the complete visible state published to the host each
//! frame. Read-only: safe to render without further core involvement.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::SessionPhase;
use crate::events::SimEvent;
use crate::types::{PidTerms, SimTime};

/// Complete session state broadcast to the presentation layer after each
/// frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    /// True when the autopilot holds control authority.
    pub autopilot: bool,
    pub shields: f32,
    pub boost_reserve: f32,
    pub is_boosting: bool,
    /// Projectiles dodged through the near-miss band this session.
    pub evade_count: u32,
    pub craft_position: Vec3,
    pub craft_velocity: Vec3,
    /// Altitude above the ground plane.
    pub altitude: f32,
    /// Craft speed magnitude.
    pub speed: f32,
    /// Last-frame X-axis controller terms (diagnostic, pre-clamp).
    pub pid_terms: PidTerms,
    pub sentries: Vec<SentryView>,
    pub projectiles: Vec<ProjectileView>,
    /// One-shot events since the previous snapshot.
    pub events: Vec<SimEvent>,
}

/// A sentry as seen by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentryView {
    pub position: Vec3,
    pub alive: bool,
    /// Cooldown progress since the last shot, 0.0 (just fired) to 1.0
    /// (ready). For charge-glow effects.
    pub cooldown_fraction: f32,
}

/// A projectile in flight as seen by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec3,
    pub direction: Vec3,
}
