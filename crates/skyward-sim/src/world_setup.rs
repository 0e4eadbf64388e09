//! Entity spawn factories for setting up the simulation world.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyward_core::components::{Projectile, Sentry};
use skyward_core::config::Tuning;
use skyward_core::types::Position;

/// Spawn the sentry roster: evenly spaced on a ring around the arena center,
/// each with an individually rolled fire interval.
pub fn spawn_sentries(world: &mut World, rng: &mut ChaCha8Rng, tuning: &Tuning) {
    for index in 0..tuning.sentry_count {
        spawn_sentry(world, rng, index, tuning);
    }
}

/// Spawn one sentry at its ring position. The ring angle doubles as the
/// hover phase offset so the roster does not bob in unison.
pub fn spawn_sentry(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    index: usize,
    tuning: &Tuning,
) -> hecs::Entity {
    let angle = index as f32 / tuning.sentry_count.max(1) as f32 * std::f32::consts::TAU;
    let anchor = Vec3::new(
        angle.cos() * tuning.sentry_ring_radius,
        tuning.sentry_altitude,
        angle.sin() * tuning.sentry_ring_radius,
    );

    let shot_interval_secs =
        rng.gen_range(tuning.sentry_fire_interval_min..=tuning.sentry_fire_interval_max);

    world.spawn((
        Position(anchor),
        Sentry {
            anchor,
            hover_phase: angle,
            alive: true,
            last_shot_secs: 0.0,
            shot_interval_secs,
        },
    ))
}

/// Spawn a projectile at `origin` aimed at `aim`.
pub fn spawn_projectile(
    world: &mut World,
    origin: Vec3,
    aim: Vec3,
    tuning: &Tuning,
) -> hecs::Entity {
    let direction = (aim - origin).normalize_or_zero();
    // Degenerate aim-at-origin request: fire straight up rather than freeze.
    let direction = if direction == Vec3::ZERO {
        Vec3::Y
    } else {
        direction
    };

    world.spawn((
        Position(origin),
        Projectile {
            direction,
            speed: tuning.projectile_speed,
            distance_travelled: 0.0,
            counted: false,
        },
    ))
}
