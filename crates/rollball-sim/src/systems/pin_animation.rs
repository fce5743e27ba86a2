//! Pin animation system: advances in-flight quarter turns.
//!
//! Animations are time-bounded and never cancelled; a finished animation
//! snaps to its target and its `PinRotation` is removed.

use hecs::{Entity, World};

use rollball_core::components::{PinRotation, Transform};

/// Smoothstep ease-in-out on `[0, 1]`.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Advance all pin animations by `dt`. `finished` is a scratch buffer.
pub fn run(world: &mut World, dt: f32, finished: &mut Vec<Entity>) {
    finished.clear();

    for (entity, (transform, anim)) in world.query_mut::<(&mut Transform, &mut PinRotation)>() {
        anim.elapsed_secs = (anim.elapsed_secs + dt).min(anim.duration_secs);
        let t = if anim.duration_secs > 0.0 {
            anim.elapsed_secs / anim.duration_secs
        } else {
            1.0
        };

        if t >= 1.0 {
            transform.rotation = anim.to;
            finished.push(entity);
        } else {
            transform.rotation = anim.from.slerp(anim.to, ease_in_out(t));
        }
    }

    for entity in finished.drain(..) {
        let _ = world.remove_one::<PinRotation>(entity);
    }
}
