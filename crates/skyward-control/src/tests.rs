#[cfg(test)]
mod tests {
    use glam::Vec3;

    use skyward_core::config::{PidGains, Tuning};

    use crate::pid::AxisController;
    use crate::threat::{compute_target, patrol_point, ThreatSource};

    fn gains(kp: f32, ki: f32, kd: f32, output_cap: f32) -> PidGains {
        PidGains {
            kp,
            ki,
            kd,
            output_cap,
        }
    }

    // ---- AxisController ----

    #[test]
    fn test_pid_pure_proportional() {
        let mut pid = AxisController::new(gains(2.0, 0.0, 0.0, 100.0), 15.0);
        let out = pid.calculate(0.5, 0.01);
        assert!((out - 1.0).abs() < 1e-6, "Pure P should output kp * error");
    }

    #[test]
    fn test_pid_output_always_within_cap() {
        // Absurd gains, large errors, tiny and large dt: output stays capped.
        let mut pid = AxisController::new(gains(1e6, 1e6, 1e6, 60.0), 15.0);
        for (error, dt) in [
            (1e9_f32, 1e-4_f32),
            (-1e9, 0.1),
            (12_345.0, 0.016),
            (-0.001, 0.033),
        ] {
            let out = pid.calculate(error, dt);
            assert!(
                out.abs() <= 60.0,
                "output {out} exceeded cap for error {error}, dt {dt}"
            );
        }
    }

    #[test]
    fn test_pid_integral_windup_clamp() {
        let mut pid = AxisController::new(gains(0.0, 1.0, 0.0, 1e9), 15.0);

        // Constant positive error: integral term climbs monotonically toward
        // ki * 15 and never exceeds it.
        let mut previous = 0.0;
        for _ in 0..2000 {
            pid.calculate(5.0, 0.1);
            let i = pid.last_terms().i;
            assert!(i >= previous, "integral term must be monotonic");
            assert!(i <= 15.0 + 1e-4, "integral term exceeded windup clamp");
            previous = i;
        }
        assert!(
            (previous - 15.0).abs() < 1e-3,
            "integral should converge to the clamp bound, got {previous}"
        );
    }

    #[test]
    fn test_pid_reset_clears_history() {
        let mut pid = AxisController::new(gains(1.0, 0.7, 3.0, 1e9), 15.0);

        pid.calculate(10.0, 0.1);
        pid.calculate(-4.0, 0.1);
        pid.reset();
        assert_eq!(pid.last_terms().p, 0.0);
        assert_eq!(pid.last_terms().i, 0.0);
        assert_eq!(pid.last_terms().d, 0.0);

        // First call after reset: no derivative contribution from history,
        // integral is exactly ki * e * dt.
        let e = 2.0;
        let dt = 0.05;
        pid.calculate(e, dt);
        let terms = pid.last_terms();
        assert_eq!(terms.d, 0.0, "first post-reset derivative must be 0");
        assert!((terms.i - 0.7 * e * dt).abs() < 1e-6);
        assert!((terms.p - 1.0 * e).abs() < 1e-6);
    }

    #[test]
    fn test_pid_derivative_tracks_error_change() {
        let mut pid = AxisController::new(gains(0.0, 0.0, 2.0, 1e9), 15.0);
        pid.calculate(1.0, 0.1);
        let out = pid.calculate(2.0, 0.1);
        // d = kd * (2 - 1) / 0.1 = 20
        assert!((out - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_pid_degenerate_dt_does_not_fault() {
        let mut pid = AxisController::new(gains(1.0, 1.0, 1.0, 50.0), 15.0);
        pid.calculate(1.0, 0.016);
        // Zero and negative dt are clamped to an epsilon, never divided raw.
        let out_zero = pid.calculate(1.0, 0.0);
        let out_negative = pid.calculate(1.0, -0.5);
        assert!(out_zero.is_finite() && out_zero.abs() <= 50.0);
        assert!(out_negative.is_finite() && out_negative.abs() <= 50.0);
    }

    // ---- Threat model ----

    #[test]
    fn test_target_within_bounds_for_any_threats() {
        let tuning = Tuning::default();
        let soft = tuning.soft_bound();
        let craft = Vec3::new(50.0, 35.0, -50.0);

        let threat_sets: Vec<Vec<ThreatSource>> = vec![
            vec![],
            vec![ThreatSource::Projectile(craft + Vec3::X)],
            vec![
                ThreatSource::Projectile(craft + Vec3::new(0.5, 0.0, 0.0)),
                ThreatSource::Projectile(craft - Vec3::new(0.0, 1.0, 0.0)),
                ThreatSource::Sentry(craft + Vec3::new(0.0, 0.0, 3.0)),
            ],
            // Degenerate: threat exactly at the craft position.
            vec![ThreatSource::Projectile(craft)],
        ];

        for (idx, threats) in threat_sets.iter().enumerate() {
            let target = compute_target(craft, threats, 7.3, &tuning);
            assert!(
                target.x.abs() <= soft + 1e-4 && target.z.abs() <= soft + 1e-4,
                "set {idx}: target {target} outside soft horizontal bounds"
            );
            assert!(
                target.y >= tuning.altitude_band_min - 1e-4
                    && target.y <= tuning.altitude_band_max + 1e-4,
                "set {idx}: target {target} outside altitude band"
            );
        }
    }

    #[test]
    fn test_patrol_exact_values() {
        let tuning = Tuning::default();
        let craft = Vec3::new(0.0, 10.0, 0.0);

        // No threats: target is the pure patrol function of elapsed time.
        let at_zero = compute_target(craft, &[], 0.0, &tuning);
        assert!((at_zero.x - 0.0).abs() < 1e-5);
        assert!((at_zero.z - tuning.patrol_radius).abs() < 1e-5);
        assert!((at_zero.y - tuning.cruise_altitude).abs() < 1e-5);

        let t = std::f32::consts::PI;
        let at_pi = compute_target(craft, &[], t, &tuning);
        let expected = patrol_point(t, &tuning);
        assert!((at_pi - expected).length() < 1e-5);
        assert!((expected.x - (t * tuning.patrol_rate_x).sin() * tuning.patrol_radius).abs() < 1e-5);
        assert!((expected.z - (t * tuning.patrol_rate_z).cos() * tuning.patrol_radius).abs() < 1e-5);
    }

    #[test]
    fn test_out_of_range_threats_ignored() {
        let tuning = Tuning::default();
        let craft = Vec3::new(0.0, 10.0, 0.0);

        // Beyond both contribution radii: equivalent to no threats at all.
        let far = vec![
            ThreatSource::Projectile(craft + Vec3::new(0.0, 0.0, 30.0)),
            ThreatSource::Sentry(craft + Vec3::new(25.0, 0.0, 0.0)),
        ];
        let with_far = compute_target(craft, &far, 2.0, &tuning);
        let without = compute_target(craft, &[], 2.0, &tuning);
        assert_eq!(with_far, without);
    }

    #[test]
    fn test_closer_projectile_pushes_harder() {
        let tuning = Tuning::default();
        let craft = Vec3::new(0.0, 10.0, 0.0);

        let near = compute_target(
            craft,
            &[ThreatSource::Projectile(craft + Vec3::new(0.0, 0.0, 2.0))],
            0.0,
            &tuning,
        );
        let far = compute_target(
            craft,
            &[ThreatSource::Projectile(craft + Vec3::new(0.0, 0.0, 12.0))],
            0.0,
            &tuning,
        );
        // Both push the target toward -Z; the closer one pushes farther.
        assert!(near.z < craft.z);
        assert!(far.z < craft.z);
        assert!(near.z < far.z);
    }

    #[test]
    fn test_sentry_weighted_at_half_strength() {
        let tuning = Tuning::default();
        let craft = Vec3::new(0.0, 10.0, 0.0);
        let offset = Vec3::new(0.0, 0.0, 6.0);

        let from_projectile = compute_target(
            craft,
            &[ThreatSource::Projectile(craft + offset)],
            0.0,
            &tuning,
        );
        let from_sentry =
            compute_target(craft, &[ThreatSource::Sentry(craft + offset)], 0.0, &tuning);

        let push_projectile = craft.z - from_projectile.z;
        let push_sentry = craft.z - from_sentry.z;
        assert!(
            (push_projectile - 2.0 * push_sentry).abs() < 1e-4,
            "projectile push {push_projectile} should be twice sentry push {push_sentry}"
        );
    }
}
