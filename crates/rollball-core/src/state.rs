//! Game state snapshot of the complete visible state sent to the presentation layer each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{Direction, GamePhase};
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub ball: Option<BallView>,
    /// Pins ordered by layout index.
    pub pins: Vec<PinView>,
    pub pins_knocked: u32,
    pub pins_total: u32,
    pub events: Vec<GameEvent>,
}

/// The ball as seen by the presentation layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BallView {
    pub position: Vec3,
    pub commanded_direction: Option<Direction>,
    /// Torque applied during the last tick.
    pub applied_torque: Vec3,
}

/// A pin as seen by the presentation layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PinView {
    pub index: u32,
    pub position: Vec3,
    /// Rotation about the vertical axis (radians).
    pub yaw: f32,
    pub rotated: bool,
    /// Whether the knock animation is still running.
    pub animating: bool,
}

impl GameStateSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
