//! Single-axis PID feedback controller.
//!
//! Three independent instances drive the craft's X, Y, Z axes. Anti-windup
//! clamps the integral accumulator itself (not the gain output), so a craft
//! pinned against an obstacle for a long stretch cannot bank an unbounded
//! integral; the output cap independently bounds actuation regardless of
//! gain tuning.

use skyward_core::config::PidGains;
use skyward_core::constants::MIN_FRAME_DT;
use skyward_core::types::PidTerms;

#[derive(Debug, Clone)]
pub struct AxisController {
    gains: PidGains,
    /// Clamp bound on `accumulated_error` (error-seconds).
    windup_limit: f32,
    accumulated_error: f32,
    /// None until the first `calculate` after construction or `reset`: the
    /// first frame has no history, so its derivative contribution is zero
    /// rather than a spike off a stale or arbitrary previous error.
    previous_error: Option<f32>,
    last_terms: PidTerms,
}

impl AxisController {
    pub fn new(gains: PidGains, windup_limit: f32) -> Self {
        Self {
            gains,
            windup_limit,
            accumulated_error: 0.0,
            previous_error: None,
            last_terms: PidTerms::default(),
        }
    }

    /// Compute the control output for one frame.
    ///
    /// `dt` is clamped to a small positive epsilon before the derivative
    /// division: a single degenerate frame must never fault the session.
    pub fn calculate(&mut self, error: f32, dt: f32) -> f32 {
        let dt = dt.max(MIN_FRAME_DT);

        let p = self.gains.kp * error;

        self.accumulated_error =
            (self.accumulated_error + error * dt).clamp(-self.windup_limit, self.windup_limit);
        let i = self.gains.ki * self.accumulated_error;

        let d = match self.previous_error {
            Some(prev) => self.gains.kd * (error - prev) / dt,
            None => 0.0,
        };
        self.previous_error = Some(error);

        self.last_terms = PidTerms { p, i, d };

        (p + i + d).clamp(-self.gains.output_cap, self.gains.output_cap)
    }

    /// Clear integral/derivative memory and cached terms.
    ///
    /// Must be called whenever control authority changes hands, else a
    /// derivative computed against the other mode's error signal injects a
    /// spurious impulse on the first frame.
    pub fn reset(&mut self) {
        self.accumulated_error = 0.0;
        self.previous_error = None;
        self.last_terms = PidTerms::default();
    }

    /// Pre-clamp term magnitudes from the most recent `calculate` call.
    pub fn last_terms(&self) -> PidTerms {
        self.last_terms
    }

    pub fn gains(&self) -> &PidGains {
        &self.gains
    }
}
