//! Projectile system — advancement, collision, near-miss credit, expiry.
//!
//! Per projectile per frame, in order: advance, collision check, near-miss
//! check, expiry check. Collision and expiry are mutually exclusive because
//! collision is evaluated first and despawns the projectile.

use hecs::{Entity, World};

use skyward_core::components::{Craft, Projectile};
use skyward_core::config::Tuning;
use skyward_core::events::SimEvent;
use skyward_core::types::Position;

/// Advance and resolve all live projectiles against the craft.
///
/// Mutates craft shields on hits (floored at 0) and the evade counter on
/// near misses. Returns true when shields reached zero this frame — the
/// engine turns that edge into session termination. Uses the engine's
/// pre-allocated despawn buffer.
pub fn run(
    world: &mut World,
    craft: &mut Craft,
    dt: f32,
    tuning: &Tuning,
    evade_count: &mut u32,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> bool {
    despawn_buffer.clear();
    let mut shields_down = false;

    for (entity, (pos, projectile)) in world.query_mut::<(&mut Position, &mut Projectile)>() {
        let step = projectile.speed * dt;
        pos.0 += projectile.direction * step;
        projectile.distance_travelled += step;

        let distance = pos.0.distance(craft.position);

        if distance < tuning.projectile_hit_radius {
            craft.shields = (craft.shields - tuning.projectile_damage).max(0.0);
            events.push(SimEvent::ShieldHit {
                damage: tuning.projectile_damage,
                shields_remaining: craft.shields,
            });
            if craft.shields <= 0.0 {
                shields_down = true;
            }
            despawn_buffer.push(entity);
            continue;
        }

        if !projectile.counted && distance < tuning.projectile_evade_radius {
            projectile.counted = true;
            *evade_count += 1;
            events.push(SimEvent::NearMiss {
                total_evades: *evade_count,
            });
        }

        if projectile.distance_travelled > tuning.projectile_max_range || pos.0.y < 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    shields_down
}
