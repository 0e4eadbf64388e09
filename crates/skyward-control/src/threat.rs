//! Threat-avoidance target model.
//!
//! Aggregates nearby threats into a single repulsion vector and derives the
//! momentary navigation target the axis controllers steer toward. Pure: no
//! shared state is read or mutated.

use glam::Vec3;

use skyward_core::config::Tuning;

/// A single avoidance input. Projectiles and sentries feed the same
/// algorithm with different radii and weights: an inbound projectile is an
/// immediate risk, a sentry merely a likely future one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThreatSource {
    Projectile(Vec3),
    Sentry(Vec3),
}

impl ThreatSource {
    pub fn position(&self) -> Vec3 {
        match self {
            ThreatSource::Projectile(p) | ThreatSource::Sentry(p) => *p,
        }
    }

    /// Radius within which this source contributes at all.
    fn radius(&self, tuning: &Tuning) -> f32 {
        match self {
            ThreatSource::Projectile(_) => tuning.projectile_threat_radius,
            ThreatSource::Sentry(_) => tuning.sentry_threat_radius,
        }
    }

    /// Weight numerator: contribution is `weight / (distance + 1)`. The +1
    /// offset avoids the singularity at zero distance.
    fn weight(&self, tuning: &Tuning) -> f32 {
        match self {
            ThreatSource::Projectile(_) => tuning.projectile_threat_weight,
            ThreatSource::Sentry(_) => tuning.sentry_threat_weight,
        }
    }
}

/// Compute the craft's momentary navigation target.
///
/// Each in-range threat pushes the target away from itself with
/// inverse-distance weighting, so closer threats dominate. The result is
/// clamped into the comfort altitude band (with a gentle pull toward cruise)
/// and to 70% of the hard horizontal bounds. When no meaningful threat is
/// nearby the target instead traces a deterministic patrol pattern of
/// elapsed time, so the autopilot never idles motionless.
pub fn compute_target(
    craft_position: Vec3,
    threats: &[ThreatSource],
    elapsed_secs: f32,
    tuning: &Tuning,
) -> Vec3 {
    let mut avoidance = Vec3::ZERO;

    for threat in threats {
        let offset = craft_position - threat.position();
        let distance = offset.length();
        if distance > threat.radius(tuning) {
            continue;
        }
        let away = offset.normalize_or_zero();
        avoidance += away * (threat.weight(tuning) / (distance + 1.0));
    }

    let mut target = craft_position + avoidance * tuning.avoidance_gain;

    target.y = target
        .y
        .clamp(tuning.altitude_band_min, tuning.altitude_band_max);
    target.y += (tuning.cruise_altitude - target.y) * tuning.cruise_pull;

    let soft = tuning.soft_bound();
    target.x = target.x.clamp(-soft, soft);
    target.z = target.z.clamp(-soft, soft);

    if avoidance.length() < tuning.patrol_threat_cutoff {
        target = patrol_point(elapsed_secs, tuning);
    }

    target
}

/// Deterministic patrol pattern: two out-of-phase sinusoids on X/Z and a
/// slower bob on Y around cruise altitude.
pub fn patrol_point(elapsed_secs: f32, tuning: &Tuning) -> Vec3 {
    Vec3::new(
        (elapsed_secs * tuning.patrol_rate_x).sin() * tuning.patrol_radius,
        tuning.cruise_altitude + (elapsed_secs * tuning.patrol_rate_y).sin() * tuning.patrol_bob,
        (elapsed_secs * tuning.patrol_rate_z).cos() * tuning.patrol_radius,
    )
}
