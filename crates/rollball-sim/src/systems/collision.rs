//! Collision handler: knocks a pin the first time the ball strikes it.
//!
//! Each pin goes Standing -> Rotated exactly once. The rotated flag is set
//! at trigger time; the quarter turn itself is animated afterwards by the
//! pin animation system, so nothing here waits on it.

use glam::{Quat, Vec3};
use hecs::{Entity, World};

use rollball_core::components::{PinRotation, Transform};
use rollball_core::constants::{PIN_ROTATION_ANGLE, UP};
use rollball_core::enums::Direction;
use rollball_core::events::GameEvent;

use crate::session::GameSession;

/// Rotation sign for a pin struck while the ball rolls along `v`.
///
/// +1 when `x >= 0` and `z > 0`, -1 for the rest of `x >= 0`, +1 when `x < 0`.
pub fn rotation_sign(v: Vec3) -> f32 {
    if v.x >= 0.0 {
        if v.z > 0.0 {
            1.0
        } else {
            -1.0
        }
    } else {
        1.0
    }
}

/// Handle a collision-begin between `a` and `b`.
///
/// Only {ball, tracked pin} pairs count, in either order. Returns true if a
/// pin was knocked.
pub fn run(
    world: &mut World,
    session: &mut GameSession,
    a: Entity,
    b: Entity,
    rotation_secs: f32,
    tick: u64,
) -> bool {
    let Some(ball) = session.ball() else {
        return false;
    };
    let pin = if a == ball && b != ball {
        b
    } else if b == ball && a != ball {
        a
    } else {
        return false;
    };

    let direction = session
        .ball_state()
        .and_then(|s| s.commanded_direction)
        .unwrap_or(Direction::Right);

    let Some(pin_state) = session.pins.get_mut(&pin) else {
        return false;
    };
    if pin_state.rotated {
        return false;
    }

    let sign = rotation_sign(direction.vector());
    pin_state.rotated = true;
    let pin_index = pin_state.index;

    let from = world.get::<&Transform>(pin).ok().map(|t| t.rotation);
    match from {
        Some(from) => {
            let turn = Quat::from_axis_angle(UP, sign * PIN_ROTATION_ANGLE);
            let _ = world.insert_one(
                pin,
                PinRotation {
                    from,
                    to: (turn * from).normalize(),
                    elapsed_secs: 0.0,
                    duration_secs: rotation_secs,
                },
            );
        }
        None => log::debug!("pin {pin_index} has no transform; skipping animation"),
    }

    log::debug!("pin {pin_index} knocked (sign {sign:+}) at tick {tick}");
    session.events.push(GameEvent::PinKnocked {
        pin_index,
        rotation_sign: sign,
        tick,
    });
    true
}
