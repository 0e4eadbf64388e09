//! Runtime configuration supplied at engine construction.
//!
//! Every tunable the simulation reads lives here; `Default` mirrors
//! `constants`. Hosts construct one `SimConfig`, hand it to the engine, and
//! never mutate it afterwards.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Gains and output cap for one feedback controller axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PidGains {
    pub kp: f32,
    pub ki: f32,
    pub kd: f32,
    /// Symmetric clamp on controller output, independent of gain tuning.
    pub output_cap: f32,
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for sentry fire-interval rolls. Fixed seed = reproducible
    /// cooldown schedule; production hosts seed from the wall clock.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

/// Complete tuning surface for the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // Frame timing
    pub min_frame_dt: f32,
    pub max_frame_dt: f32,

    // Arena
    pub arena_half_extent: f32,
    pub arena_floor: f32,
    pub arena_ceiling: f32,
    pub soft_bound_fraction: f32,

    // Autopilot target shaping
    pub altitude_band_min: f32,
    pub altitude_band_max: f32,
    pub cruise_altitude: f32,
    pub cruise_pull: f32,
    pub patrol_rate_x: f32,
    pub patrol_rate_z: f32,
    pub patrol_rate_y: f32,
    pub patrol_radius: f32,
    pub patrol_bob: f32,
    pub patrol_threat_cutoff: f32,

    // Threat weighting
    pub projectile_threat_radius: f32,
    pub projectile_threat_weight: f32,
    pub sentry_threat_radius: f32,
    pub sentry_threat_weight: f32,
    pub avoidance_gain: f32,

    // PID
    pub integral_windup_limit: f32,
    pub pid_horizontal: PidGains,
    pub pid_vertical: PidGains,

    // Craft
    pub thrust_force: f32,
    pub boost_factor: f32,
    pub gravity_force: f32,
    pub hover_force: f32,
    pub damping_factor: f32,
    /// Apply damping as `factor^(dt * reference_rate)` instead of once per
    /// frame. Off by default: the legacy per-frame multiply is frame-rate
    /// dependent but is what the game feel was tuned against.
    pub framerate_corrected_damping: bool,
    pub damping_reference_rate: f32,
    pub boost_max: f32,
    pub boost_drain_per_sec: f32,
    pub boost_recharge_per_sec: f32,
    pub shield_max: f32,
    pub shield_regen_per_sec: f32,
    pub craft_spawn: [f32; 3],

    // Sentries
    pub sentry_count: usize,
    pub sentry_ring_radius: f32,
    pub sentry_altitude: f32,
    pub sentry_hover_amplitude: f32,
    pub sentry_hover_rate: f32,
    pub sentry_engagement_range: f32,
    pub sentry_fire_interval_min: f32,
    pub sentry_fire_interval_max: f32,
    pub sentry_aim_lead_secs: f32,

    // Projectiles
    pub projectile_speed: f32,
    pub projectile_hit_radius: f32,
    pub projectile_evade_radius: f32,
    pub projectile_max_range: f32,
    pub projectile_damage: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            min_frame_dt: MIN_FRAME_DT,
            max_frame_dt: MAX_FRAME_DT,

            arena_half_extent: ARENA_HALF_EXTENT,
            arena_floor: ARENA_FLOOR,
            arena_ceiling: ARENA_CEILING,
            soft_bound_fraction: SOFT_BOUND_FRACTION,

            altitude_band_min: ALTITUDE_BAND_MIN,
            altitude_band_max: ALTITUDE_BAND_MAX,
            cruise_altitude: CRUISE_ALTITUDE,
            cruise_pull: CRUISE_PULL,
            patrol_rate_x: PATROL_RATE_X,
            patrol_rate_z: PATROL_RATE_Z,
            patrol_rate_y: PATROL_RATE_Y,
            patrol_radius: PATROL_RADIUS,
            patrol_bob: PATROL_BOB,
            patrol_threat_cutoff: PATROL_THREAT_CUTOFF,

            projectile_threat_radius: PROJECTILE_THREAT_RADIUS,
            projectile_threat_weight: PROJECTILE_THREAT_WEIGHT,
            sentry_threat_radius: SENTRY_THREAT_RADIUS,
            sentry_threat_weight: SENTRY_THREAT_WEIGHT,
            avoidance_gain: AVOIDANCE_GAIN,

            integral_windup_limit: INTEGRAL_WINDUP_LIMIT,
            pid_horizontal: PidGains {
                kp: PID_HORIZONTAL_KP,
                ki: PID_HORIZONTAL_KI,
                kd: PID_HORIZONTAL_KD,
                output_cap: PID_HORIZONTAL_CAP,
            },
            pid_vertical: PidGains {
                kp: PID_VERTICAL_KP,
                ki: PID_VERTICAL_KI,
                kd: PID_VERTICAL_KD,
                output_cap: PID_VERTICAL_CAP,
            },

            thrust_force: THRUST_FORCE,
            boost_factor: BOOST_FACTOR,
            gravity_force: GRAVITY_FORCE,
            hover_force: HOVER_FORCE,
            damping_factor: DAMPING_FACTOR,
            framerate_corrected_damping: false,
            damping_reference_rate: DAMPING_REFERENCE_RATE,
            boost_max: BOOST_MAX,
            boost_drain_per_sec: BOOST_DRAIN_PER_SEC,
            boost_recharge_per_sec: BOOST_RECHARGE_PER_SEC,
            shield_max: SHIELD_MAX,
            shield_regen_per_sec: SHIELD_REGEN_PER_SEC,
            craft_spawn: CRAFT_SPAWN,

            sentry_count: SENTRY_COUNT,
            sentry_ring_radius: SENTRY_RING_RADIUS,
            sentry_altitude: SENTRY_ALTITUDE,
            sentry_hover_amplitude: SENTRY_HOVER_AMPLITUDE,
            sentry_hover_rate: SENTRY_HOVER_RATE,
            sentry_engagement_range: SENTRY_ENGAGEMENT_RANGE,
            sentry_fire_interval_min: SENTRY_FIRE_INTERVAL_MIN,
            sentry_fire_interval_max: SENTRY_FIRE_INTERVAL_MAX,
            sentry_aim_lead_secs: SENTRY_AIM_LEAD_SECS,

            projectile_speed: PROJECTILE_SPEED,
            projectile_hit_radius: PROJECTILE_HIT_RADIUS,
            projectile_evade_radius: PROJECTILE_EVADE_RADIUS,
            projectile_max_range: PROJECTILE_MAX_RANGE,
            projectile_damage: PROJECTILE_DAMAGE,
        }
    }
}

impl Tuning {
    /// Soft horizontal bound the autopilot target is clamped to.
    pub fn soft_bound(&self) -> f32 {
        self.arena_half_extent * self.soft_bound_fraction
    }
}
