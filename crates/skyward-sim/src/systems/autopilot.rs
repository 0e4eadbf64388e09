//! Autopilot system — closed-loop steering from the threat-avoidance target.
//!
//! Gathers live threats from the world, asks the threat model for a target,
//! and runs one feedback controller per axis against it. The three
//! controllers are independent; each axis error is simply
//! `target - position` on that axis.

use glam::Vec3;
use hecs::World;

use skyward_core::components::{Craft, Projectile, Sentry};
use skyward_core::config::Tuning;
use skyward_core::types::{PidTerms, Position};

use skyward_control::pid::AxisController;
use skyward_control::threat::{compute_target, ThreatSource};

/// The three per-axis controllers plus the authority-change reset rule.
#[derive(Debug, Clone)]
pub struct Autopilot {
    x: AxisController,
    y: AxisController,
    z: AxisController,
}

impl Autopilot {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: AxisController::new(tuning.pid_horizontal, tuning.integral_windup_limit),
            y: AxisController::new(tuning.pid_vertical, tuning.integral_windup_limit),
            z: AxisController::new(tuning.pid_horizontal, tuning.integral_windup_limit),
        }
    }

    /// Clear all three controllers. Called synchronously on every control
    /// authority change and on restart, before the next `calculate`.
    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
        self.z.reset();
    }

    /// One control step toward `target`: returns the force to apply.
    pub fn steer(&mut self, position: Vec3, target: Vec3, dt: f32) -> Vec3 {
        Vec3::new(
            self.x.calculate(target.x - position.x, dt),
            self.y.calculate(target.y - position.y, dt),
            self.z.calculate(target.z - position.z, dt),
        )
    }

    /// X-axis terms from the latest step, published in the snapshot.
    pub fn diagnostic_terms(&self) -> PidTerms {
        self.x.last_terms()
    }
}

/// Run one autopilot frame: gather threats, derive the target, steer.
pub fn run(
    autopilot: &mut Autopilot,
    world: &World,
    craft: &Craft,
    elapsed_secs: f32,
    dt: f32,
    tuning: &Tuning,
) -> Vec3 {
    let threats = gather_threats(world);
    let target = compute_target(craft.position, &threats, elapsed_secs, tuning);
    autopilot.steer(craft.position, target, dt)
}

/// Collect avoidance inputs: every live projectile and every alive sentry.
/// Range filtering belongs to the threat model, not here.
pub fn gather_threats(world: &World) -> Vec<ThreatSource> {
    let mut threats = Vec::new();

    let mut projectiles = world.query::<(&Position, &Projectile)>();
    for (_entity, (pos, _projectile)) in projectiles.iter() {
        threats.push(ThreatSource::Projectile(pos.0));
    }

    let mut sentries = world.query::<(&Position, &Sentry)>();
    for (_entity, (pos, sentry)) in sentries.iter() {
        if sentry.alive {
            threats.push(ThreatSource::Sentry(pos.0));
        }
    }

    threats
}
