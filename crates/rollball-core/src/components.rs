//! Components and per-entity state.
//!
//! `Transform`, `RigidBody`, the markers and `PinRotation` live on hecs
//! entities and describe the physical scene. `BallState` and `PinState` are
//! game-rule state held in the session's side tables, keyed by entity.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::{BodyMode, Direction};

/// Translation and orientation of a scene entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Rotation about the vertical axis (radians).
    pub fn yaw(&self) -> f32 {
        let (yaw, _, _) = self.rotation.to_euler(glam::EulerRot::YXZ);
        yaw
    }
}

/// Physics body with a spherical collision shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    pub mode: BodyMode,
    pub mass: f32,
    /// Collision radius on the play plane (meters).
    pub radius: f32,
    /// Torque accumulated for the current step. Cleared after every step.
    pub torque: Vec3,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
}

impl RigidBody {
    pub fn new(mode: BodyMode, mass: f32, radius: f32) -> Self {
        Self {
            mode,
            mass,
            radius,
            torque: Vec3::ZERO,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
        }
    }

    /// Add a continuous torque for the current step only.
    pub fn apply_torque(&mut self, torque: Vec3) {
        self.torque += torque;
    }

    /// Moment of inertia of a solid sphere.
    pub fn inertia(&self) -> f32 {
        0.4 * self.mass * self.radius * self.radius
    }
}

/// Marks the player-controlled ball.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball;

/// Marks a bowling pin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pin;

/// In-flight yaw animation of a struck pin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinRotation {
    pub from: Quat,
    pub to: Quat,
    pub elapsed_secs: f32,
    pub duration_secs: f32,
}

/// Control state of the ball.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallState {
    /// Direction currently commanded by input, if any.
    pub commanded_direction: Option<Direction>,
}

/// Knock state of one pin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinState {
    /// Set once when the ball first strikes the pin. Never reset.
    pub rotated: bool,
    /// Position of the pin in the layout.
    pub index: u32,
}
