//! Simulation constants and default tuning parameters.
//!
//! These are the defaults behind `config::Tuning`; the engine reads the
//! config struct, not these constants, so hosts can retune at construction.

// --- Frame timing ---

/// Smallest delta-time accepted by any integration or derivative step.
/// Zero/negative frame deltas are clamped up to this instead of faulting.
pub const MIN_FRAME_DT: f32 = 1.0e-4;

/// Largest delta-time accepted per frame. Bounds the physics displacement of
/// the first frame after a host stall (e.g. a tab losing focus).
pub const MAX_FRAME_DT: f32 = 0.1;

/// Reference frame rate for the corrected damping formulation (Hz).
pub const DAMPING_REFERENCE_RATE: f32 = 60.0;

// --- Arena ---

/// Horizontal half-extent of the arena on X and Z (hard bound).
pub const ARENA_HALF_EXTENT: f32 = 60.0;

/// Ground plane altitude. Inelastic contact: downward velocity is zeroed.
pub const ARENA_FLOOR: f32 = 1.0;

/// Ceiling altitude. Soft contact: clamped without velocity correction.
pub const ARENA_CEILING: f32 = 40.0;

/// Fraction of the hard X/Z bounds the autopilot target is clamped to,
/// keeping the autopilot from hugging walls.
pub const SOFT_BOUND_FRACTION: f32 = 0.7;

// --- Autopilot altitude band / patrol ---

/// Lower edge of the comfortable altitude band for autopilot targets.
pub const ALTITUDE_BAND_MIN: f32 = 4.0;

/// Upper edge of the comfortable altitude band for autopilot targets.
pub const ALTITUDE_BAND_MAX: f32 = 28.0;

/// Nominal cruise altitude the target is pulled toward.
pub const CRUISE_ALTITUDE: f32 = 10.0;

/// Per-call pull fraction toward cruise altitude after band clamping.
pub const CRUISE_PULL: f32 = 0.15;

/// Angular rate of the patrol sinusoid on X (rad/s of elapsed time).
pub const PATROL_RATE_X: f32 = 0.30;

/// Angular rate of the patrol sinusoid on Z (rad/s of elapsed time).
pub const PATROL_RATE_Z: f32 = 0.23;

/// Angular rate of the vertical patrol bob (rad/s of elapsed time).
pub const PATROL_RATE_Y: f32 = 0.50;

/// Horizontal radius of the patrol pattern.
pub const PATROL_RADIUS: f32 = 25.0;

/// Vertical amplitude of the patrol bob around cruise altitude.
pub const PATROL_BOB: f32 = 4.0;

/// Threat-vector magnitude below which the autopilot patrols instead of
/// avoiding. Tunable with no derived value; see the threat model docs.
pub const PATROL_THREAT_CUTOFF: f32 = 1.0;

// --- Threat weighting ---

/// Radius within which a live projectile contributes to the avoidance vector.
pub const PROJECTILE_THREAT_RADIUS: f32 = 20.0;

/// Weight numerator for projectile threats: `20 / (distance + 1)`.
pub const PROJECTILE_THREAT_WEIGHT: f32 = 20.0;

/// Radius within which an alive sentry contributes to the avoidance vector.
pub const SENTRY_THREAT_RADIUS: f32 = 15.0;

/// Weight numerator for sentry threats — half strength relative to
/// projectiles, reflecting lower immediate risk.
pub const SENTRY_THREAT_WEIGHT: f32 = 10.0;

/// Multiplier from accumulated avoidance vector to target displacement.
pub const AVOIDANCE_GAIN: f32 = 2.0;

// --- PID ---

/// Anti-windup clamp on the integral accumulator (error-seconds), applied to
/// the accumulator itself rather than the gain output so a long saturation
/// cannot cascade.
pub const INTEGRAL_WINDUP_LIMIT: f32 = 15.0;

/// Horizontal axis gains (X and Z).
pub const PID_HORIZONTAL_KP: f32 = 2.0;
pub const PID_HORIZONTAL_KI: f32 = 0.4;
pub const PID_HORIZONTAL_KD: f32 = 1.2;
pub const PID_HORIZONTAL_CAP: f32 = 60.0;

/// Vertical axis gains (Y) — stiffer, fighting the gravity/hover bias.
pub const PID_VERTICAL_KP: f32 = 2.6;
pub const PID_VERTICAL_KI: f32 = 0.5;
pub const PID_VERTICAL_KD: f32 = 1.4;
pub const PID_VERTICAL_CAP: f32 = 80.0;

// --- Craft ---

/// Manual per-axis thrust magnitude.
pub const THRUST_FORCE: f32 = 40.0;

/// Thrust multiplier while boosting.
pub const BOOST_FACTOR: f32 = 2.0;

/// Constant downward gravity bias on the craft.
pub const GRAVITY_FORCE: f32 = 9.8;

/// Constant upward hover bias. Slightly exceeds gravity so the craft stays
/// aloft with no vertical input.
pub const HOVER_FORCE: f32 = 10.5;

/// Per-frame velocity damping multiplier (legacy frame-rate-dependent drag).
pub const DAMPING_FACTOR: f32 = 0.95;

/// Boost reserve capacity.
pub const BOOST_MAX: f32 = 100.0;

/// Boost reserve drain rate while boosting (units/s).
pub const BOOST_DRAIN_PER_SEC: f32 = 35.0;

/// Boost reserve recharge rate while not boosting (units/s).
pub const BOOST_RECHARGE_PER_SEC: f32 = 12.0;

/// Shield capacity. Zero shields ends the session.
pub const SHIELD_MAX: f32 = 100.0;

/// Shield regeneration rate (units/s). Zero by default so damage arithmetic
/// stays exact.
pub const SHIELD_REGEN_PER_SEC: f32 = 0.0;

/// Craft spawn position.
pub const CRAFT_SPAWN: [f32; 3] = [0.0, 10.0, 0.0];

// --- Sentries ---

/// Number of sentries in the roster.
pub const SENTRY_COUNT: usize = 4;

/// Radius of the ring the sentries are anchored on.
pub const SENTRY_RING_RADIUS: f32 = 40.0;

/// Sentry anchor altitude.
pub const SENTRY_ALTITUDE: f32 = 8.0;

/// Amplitude of the sentry hover oscillation.
pub const SENTRY_HOVER_AMPLITUDE: f32 = 0.6;

/// Angular rate of the sentry hover oscillation (rad/s).
pub const SENTRY_HOVER_RATE: f32 = 1.5;

/// Maximum craft distance at which a sentry will fire.
pub const SENTRY_ENGAGEMENT_RANGE: f32 = 55.0;

/// Minimum interval between shots from one sentry (seconds).
pub const SENTRY_FIRE_INTERVAL_MIN: f32 = 1.2;

/// Maximum interval between shots from one sentry (seconds).
pub const SENTRY_FIRE_INTERVAL_MAX: f32 = 3.0;

/// Lead time applied to the aim point when the craft is manually flown
/// (seconds of craft velocity). Autopilot flight gets no lead.
pub const SENTRY_AIM_LEAD_SECS: f32 = 0.35;

// --- Projectiles ---

/// Projectile speed (units/s).
pub const PROJECTILE_SPEED: f32 = 60.0;

/// Craft distance under which a projectile collides.
pub const PROJECTILE_HIT_RADIUS: f32 = 2.0;

/// Craft distance under which a non-colliding pass counts as an evade.
pub const PROJECTILE_EVADE_RADIUS: f32 = 5.0;

/// Travel distance after which a projectile expires.
pub const PROJECTILE_MAX_RANGE: f32 = 120.0;

/// Shield damage per projectile hit.
pub const PROJECTILE_DAMAGE: f32 = 18.0;
