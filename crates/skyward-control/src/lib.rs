//! Control algorithms for SKYWARD.
//!
//! Pure numeric code with no ECS dependency: the per-axis feedback
//! controller and the threat-avoidance target model. Operates on plain data;
//! the sim crate wires it to the world each frame.

pub mod pid;
pub mod threat;

pub use pid::AxisController;
pub use threat::{compute_target, ThreatSource};

#[cfg(test)]
mod tests;
