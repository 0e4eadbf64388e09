//! Sentry system — hover animation and cooldown-gated fire decisions.
//!
//! The fire decision is separated from the spawn effect: this system only
//! returns `SpawnRequest`s, and the engine turns them into projectile
//! entities. That keeps the targeting logic testable without a world.

use glam::Vec3;
use hecs::World;

use skyward_core::components::{Craft, Sentry};
use skyward_core::config::Tuning;
use skyward_core::types::Position;

/// A decision to fire: where from and at what point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub origin: Vec3,
    pub aim: Vec3,
}

/// Swing each alive sentry around its anchor with a small vertical
/// oscillation. Presentation-adjacent, but the offset position is what the
/// threat model and fire checks see, so it runs in the sim step.
pub fn animate(world: &mut World, elapsed_secs: f32, tuning: &Tuning) {
    for (_entity, (pos, sentry)) in world.query_mut::<(&mut Position, &Sentry)>() {
        if !sentry.alive {
            continue;
        }
        let bob = (elapsed_secs * tuning.sentry_hover_rate + sentry.hover_phase).sin()
            * tuning.sentry_hover_amplitude;
        pos.0 = sentry.anchor + Vec3::Y * bob;
    }
}

/// Evaluate every sentry's firing condition once. Updates cooldown stamps on
/// the sentries that fire and returns their spawn requests.
pub fn run(
    world: &mut World,
    craft: &Craft,
    autopilot: bool,
    now_secs: f32,
    tuning: &Tuning,
) -> Vec<SpawnRequest> {
    let mut requests = Vec::new();

    for (_entity, (pos, sentry)) in world.query_mut::<(&Position, &mut Sentry)>() {
        if let Some(request) = maybe_fire(pos.0, sentry, craft, autopilot, now_secs, tuning) {
            requests.push(request);
        }
    }

    requests
}

/// Single-sentry fire decision.
///
/// Fires only when the craft is within engagement range and the sentry's
/// individually-rolled interval has elapsed since its last shot. The aim
/// point is the craft's position; a manually flown craft additionally gets
/// led along its current velocity.
pub fn maybe_fire(
    origin: Vec3,
    sentry: &mut Sentry,
    craft: &Craft,
    autopilot: bool,
    now_secs: f32,
    tuning: &Tuning,
) -> Option<SpawnRequest> {
    if !sentry.alive {
        return None;
    }
    if origin.distance(craft.position) > tuning.sentry_engagement_range {
        return None;
    }
    if now_secs - sentry.last_shot_secs < sentry.shot_interval_secs {
        return None;
    }

    sentry.last_shot_secs = now_secs;

    let mut aim = craft.position;
    if !autopilot {
        aim += craft.velocity * tuning.sentry_aim_lead_secs;
    }

    Some(SpawnRequest { origin, aim })
}
