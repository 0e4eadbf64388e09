//! Session commands and the per-frame input snapshot.
//!
//! Commands are queued and processed at the next frame boundary. The input
//! snapshot is an opaque boolean-per-action view of the operator's currently
//! held controls — the core never sees raw device events.

use serde::{Deserialize, Serialize};

/// Control commands from the host layer. All idempotent-safe: pausing before
/// the session starts, restarting twice, etc. are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    /// Begin a session from the menu.
    Start { autopilot: bool },
    /// Freeze/unfreeze the simulation step. Presentation stays live.
    TogglePause,
    /// Flip control authority. Resets all three axis controllers before the
    /// next frame so stale integral/derivative memory cannot inject an
    /// impulse under the new error signal.
    ToggleAutopilot,
    /// Full state reset: craft, controllers, projectiles, shields, boost,
    /// timers, sentry cooldown re-roll. Atomic with respect to the next
    /// frame — no system ever reads a partially reset world.
    Restart,
    /// End the session; the host tears down after the current frame.
    Quit,
}

/// Currently-held logical controls, sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub ascend: bool,
    pub descend: bool,
    pub boost: bool,
}

impl InputState {
    /// True when no directional control is held.
    pub fn is_idle(&self) -> bool {
        !(self.forward || self.back || self.left || self.right || self.ascend || self.descend)
    }
}
