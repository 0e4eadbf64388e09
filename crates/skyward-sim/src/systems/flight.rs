//! Craft dynamics — force integration, damping, arena bounds, boost reserve.

use glam::Vec3;

use skyward_core::commands::InputState;
use skyward_core::components::Craft;
use skyward_core::config::Tuning;

/// Compose the manual-mode force from the held-key snapshot.
///
/// Directional keys contribute fixed-magnitude thrust per axis, doubled while
/// boosting. The vertical axis always carries the hover-minus-gravity bias,
/// which nets slightly upward so the craft stays aloft with no input.
pub fn manual_force(input: &InputState, craft: &Craft, tuning: &Tuning) -> Vec3 {
    let thrust = if craft.is_boosting {
        tuning.thrust_force * tuning.boost_factor
    } else {
        tuning.thrust_force
    };

    let mut force = Vec3::ZERO;
    if input.forward {
        force.z -= thrust;
    }
    if input.back {
        force.z += thrust;
    }
    if input.left {
        force.x -= thrust;
    }
    if input.right {
        force.x += thrust;
    }
    if input.ascend {
        force.y += thrust;
    }
    if input.descend {
        force.y -= thrust;
    }

    force.y += tuning.hover_force - tuning.gravity_force;
    force
}

/// Advance the boost reserve: drain while the key is held and reserve
/// remains, otherwise recharge toward the cap. Boosting is only possible
/// while the reserve is positive.
pub fn update_boost(craft: &mut Craft, boost_held: bool, dt: f32, tuning: &Tuning) {
    if boost_held && craft.boost_reserve > 0.0 {
        craft.is_boosting = true;
        craft.boost_reserve = (craft.boost_reserve - tuning.boost_drain_per_sec * dt).max(0.0);
    } else {
        craft.is_boosting = false;
        craft.boost_reserve = (craft.boost_reserve + tuning.boost_recharge_per_sec * dt)
            .min(tuning.boost_max);
    }
}

/// Integrate one frame of craft motion and enforce the arena bounds.
///
/// The damping multiplier is applied once per frame regardless of `dt` — the
/// effective drag is frame-rate dependent, and the game feel was tuned
/// against that. `framerate_corrected_damping` switches to the
/// `factor^(dt * rate)` formulation for hosts that want rate independence.
pub fn integrate(craft: &mut Craft, force: Vec3, dt: f32, tuning: &Tuning) {
    craft.velocity += force * dt;

    let damping = if tuning.framerate_corrected_damping {
        tuning
            .damping_factor
            .powf(dt * tuning.damping_reference_rate)
    } else {
        tuning.damping_factor
    };
    craft.velocity *= damping;

    craft.position += craft.velocity * dt;

    // Floor contact is inelastic: residual downward velocity is discarded.
    if craft.position.y < tuning.arena_floor {
        craft.position.y = tuning.arena_floor;
        if craft.velocity.y < 0.0 {
            craft.velocity.y = 0.0;
        }
    }
    // Soft ceiling and walls: clamp only, no velocity correction.
    if craft.position.y > tuning.arena_ceiling {
        craft.position.y = tuning.arena_ceiling;
    }
    let bound = tuning.arena_half_extent;
    craft.position.x = craft.position.x.clamp(-bound, bound);
    craft.position.z = craft.position.z.clamp(-bound, bound);

    if tuning.shield_regen_per_sec > 0.0 && craft.shields > 0.0 {
        craft.shields =
            (craft.shields + tuning.shield_regen_per_sec * dt).min(tuning.shield_max);
    }
}
