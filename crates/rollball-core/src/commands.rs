//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start (or keep) rolling the ball toward a direction.
    StartApplyingForce { direction: Direction },
    /// Stop applying torque to the ball.
    StopApplyingForce,
    /// Tear down the current session and set up a fresh one.
    Retry,
}
