//! Enumeration types used throughout the simulation.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Commanded rolling direction on the play plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Away from the viewer (-Z).
    Up,
    /// Toward the viewer (+Z).
    Down,
    /// -X.
    Left,
    /// +X.
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit horizontal vector for this direction.
    pub fn vector(self) -> Vec3 {
        match self {
            Direction::Up => Vec3::new(0.0, 0.0, -1.0),
            Direction::Down => Vec3::new(0.0, 0.0, 1.0),
            Direction::Left => Vec3::new(-1.0, 0.0, 0.0),
            Direction::Right => Vec3::new(1.0, 0.0, 0.0),
        }
    }

    /// Arrow glyph shown on the directional buttons.
    pub fn icon_name(self) -> &'static str {
        match self {
            Direction::Up => "arrow.up.circle.fill",
            Direction::Down => "arrow.down.circle.fill",
            Direction::Left => "arrow.left.circle.fill",
            Direction::Right => "arrow.right.circle.fill",
        }
    }
}

/// Rigid body simulation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyMode {
    /// Never moves.
    Static,
    /// Moved only by explicit transform changes.
    Kinematic,
    /// Integrated from forces and torques.
    #[default]
    Dynamic,
}

/// Who steps rigid bodies and reports contacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhysicsBackend {
    /// Built-in rolling integrator and contact detection.
    #[default]
    Headless,
    /// A host engine reads applied torque and feeds collision-begin events.
    External,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}
