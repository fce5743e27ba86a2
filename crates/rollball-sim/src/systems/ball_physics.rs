//! Ball physics system: turns the commanded direction into rolling torque.
//!
//! Torque is continuous, so it is re-applied on every tick the direction is
//! held. The torque axis is perpendicular to the direction on the play
//! plane, which rolls the ball toward that direction.

use glam::Vec3;
use hecs::World;

use rollball_core::components::RigidBody;
use rollball_core::enums::Direction;

use crate::session::GameSession;

/// Torque that rolls a ball toward `direction`.
pub fn rolling_torque(direction: Direction, strength: f32) -> Vec3 {
    let v = direction.vector();
    Vec3::new(v.z, 0.0, -v.x) * strength
}

/// Apply this tick's torque to the ball. Returns the torque applied
/// (zero when idle or when the ball body is gone).
pub fn run(world: &mut World, session: &GameSession, torque_strength: f32) -> Vec3 {
    let Some(ball) = session.ball() else {
        return Vec3::ZERO;
    };
    let Some(direction) = session.ball_state().and_then(|s| s.commanded_direction) else {
        return Vec3::ZERO;
    };

    match world.get::<&mut RigidBody>(ball) {
        Ok(mut body) => {
            let torque = rolling_torque(direction, torque_strength);
            body.apply_torque(torque);
            torque
        }
        Err(_) => Vec3::ZERO,
    }
}
