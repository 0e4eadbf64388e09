//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// Shields reached zero. Terminal: the simulation stops mutating craft
    /// and shield state; visual-only animation may continue host-side.
    GameOver,
}

/// Who holds control authority over the craft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlMode {
    /// Closed-loop autopilot: three per-axis feedback controllers fed by the
    /// threat-avoidance target.
    #[default]
    Autopilot,
    /// Human operator via the logical key-state snapshot.
    Manual,
}

impl ControlMode {
    pub fn is_autopilot(&self) -> bool {
        matches!(self, ControlMode::Autopilot)
    }

    pub fn toggled(&self) -> ControlMode {
        match self {
            ControlMode::Autopilot => ControlMode::Manual,
            ControlMode::Manual => ControlMode::Autopilot,
        }
    }
}
