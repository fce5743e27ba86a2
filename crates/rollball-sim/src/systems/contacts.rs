//! Headless contact detection between the ball and pins.
//!
//! Reports a collision-begin only when a pair starts touching; pairs that
//! stay in contact are not reported again until they separate.

use std::collections::HashSet;

use hecs::{Entity, World};

use rollball_core::components::{Pin, RigidBody, Transform};

/// Find ball-pin pairs that began touching this tick.
///
/// `touching` carries contact state between ticks. New pairs are written to
/// `began` as `(ball, pin)`.
pub fn detect(
    world: &World,
    ball: Entity,
    touching: &mut HashSet<Entity>,
    began: &mut Vec<(Entity, Entity)>,
) {
    began.clear();

    let (ball_pos, ball_radius) = {
        let Ok(transform) = world.get::<&Transform>(ball) else {
            return;
        };
        let Ok(body) = world.get::<&RigidBody>(ball) else {
            return;
        };
        (transform.translation, body.radius)
    };

    for (pin, (_marker, transform, body)) in world.query::<(&Pin, &Transform, &RigidBody)>().iter() {
        let offset = transform.translation - ball_pos;
        let horizontal_sq = offset.x * offset.x + offset.z * offset.z;
        let reach = ball_radius + body.radius;

        if horizontal_sq <= reach * reach {
            if touching.insert(pin) {
                began.push((ball, pin));
            }
        } else {
            touching.remove(&pin);
        }
    }
}
