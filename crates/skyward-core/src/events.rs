//! Events emitted by the simulation for host audio/FX feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One-shot events drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A sentry fired a projectile.
    SentryFired { origin: Vec3 },
    /// A projectile struck the craft.
    ShieldHit { damage: f32, shields_remaining: f32 },
    /// A projectile passed through the evade band without hitting.
    NearMiss { total_evades: u32 },
    /// Shields reached zero — session terminal. Emitted exactly once.
    ShieldsDown,
}
