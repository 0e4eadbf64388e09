//! Snapshot builder — publishes the frame's complete visible state.

use hecs::World;

use skyward_core::components::{Craft, Projectile, Sentry};
use skyward_core::enums::{ControlMode, SessionPhase};
use skyward_core::events::SimEvent;
use skyward_core::state::{ProjectileView, SentryView, SessionSnapshot};
use skyward_core::types::{PidTerms, Position, SimTime};

/// Build the outward snapshot for one frame.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    craft: &Craft,
    time: &SimTime,
    phase: SessionPhase,
    control_mode: ControlMode,
    evade_count: u32,
    pid_terms: PidTerms,
    events: Vec<SimEvent>,
) -> SessionSnapshot {
    let mut sentries = Vec::new();
    let mut sentry_query = world.query::<(&Position, &Sentry)>();
    for (_entity, (pos, sentry)) in sentry_query.iter() {
        let cooldown_fraction = if sentry.shot_interval_secs > 0.0 {
            ((time.elapsed_secs - sentry.last_shot_secs) / sentry.shot_interval_secs)
                .clamp(0.0, 1.0)
        } else {
            1.0
        };
        sentries.push(SentryView {
            position: pos.0,
            alive: sentry.alive,
            cooldown_fraction,
        });
    }

    let mut projectiles = Vec::new();
    let mut projectile_query = world.query::<(&Position, &Projectile)>();
    for (_entity, (pos, projectile)) in projectile_query.iter() {
        projectiles.push(ProjectileView {
            position: pos.0,
            direction: projectile.direction,
        });
    }

    SessionSnapshot {
        time: *time,
        phase,
        autopilot: control_mode.is_autopilot(),
        shields: craft.shields,
        boost_reserve: craft.boost_reserve,
        is_boosting: craft.is_boosting,
        evade_count,
        craft_position: craft.position,
        craft_velocity: craft.velocity,
        altitude: craft.altitude(),
        speed: craft.speed(),
        pid_terms,
        sentries,
        projectiles,
        events,
    }
}
