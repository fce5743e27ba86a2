//! Input translation: joystick drags and directional buttons to player commands.

use serde::{Deserialize, Serialize};

use crate::commands::PlayerCommand;
use crate::constants::JOYSTICK_KNOB_LIMIT;
use crate::enums::Direction;

/// Raw input from the joystick or the four directional buttons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// Drag translation sample, screen coordinates (+y points down).
    DragChanged { dx: f32, dy: f32 },
    DragEnded,
    ButtonPressed { direction: Direction },
    ButtonReleased,
}

/// Derive a direction from a 2-D drag vector.
///
/// The dominant axis wins. Ties, including a zero vector, go to the
/// vertical axis.
pub fn drag_to_direction(dx: f32, dy: f32) -> Direction {
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Map an input event to the command it issues.
pub fn translate(event: InputEvent) -> PlayerCommand {
    match event {
        InputEvent::DragChanged { dx, dy } => PlayerCommand::StartApplyingForce {
            direction: drag_to_direction(dx, dy),
        },
        InputEvent::ButtonPressed { direction } => PlayerCommand::StartApplyingForce { direction },
        InputEvent::DragEnded | InputEvent::ButtonReleased => PlayerCommand::StopApplyingForce,
    }
}

/// Virtual joystick: tracks the knob offset and emits commands.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Joystick {
    /// Knob offset from the base center, clamped to the knob limit.
    pub knob: (f32, f32),
}

impl Joystick {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a drag sample. Returns the command to forward.
    pub fn drag_changed(&mut self, dx: f32, dy: f32) -> PlayerCommand {
        self.knob = (
            dx.clamp(-JOYSTICK_KNOB_LIMIT, JOYSTICK_KNOB_LIMIT),
            dy.clamp(-JOYSTICK_KNOB_LIMIT, JOYSTICK_KNOB_LIMIT),
        );
        translate(InputEvent::DragChanged { dx, dy })
    }

    /// Handle drag release. Recenters the knob.
    pub fn drag_ended(&mut self) -> PlayerCommand {
        self.knob = (0.0, 0.0);
        translate(InputEvent::DragEnded)
    }
}
