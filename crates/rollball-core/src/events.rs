//! Events emitted by the simulation for the presentation layer.

use serde::{Deserialize, Serialize};

/// Gameplay events, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The ball struck a standing pin; it starts rotating.
    PinKnocked {
        pin_index: u32,
        /// +1.0 or -1.0, direction of the quarter turn about the vertical axis.
        rotation_sign: f32,
        tick: u64,
    },
    /// Every pin has been knocked. Emitted once per session.
    GameOver { pins_knocked: u32, tick: u64 },
}
