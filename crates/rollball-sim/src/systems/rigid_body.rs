//! Headless rigid-body step.
//!
//! Stands in for the host physics engine when no AR engine is attached:
//! integrates torque into angular velocity and rolls dynamic spheres
//! without slipping on the play plane.

use glam::Quat;
use hecs::World;

use rollball_core::components::{RigidBody, Transform};
use rollball_core::constants::{MAX_ANGULAR_SPEED, ROLLING_DAMPING, UP};
use rollball_core::enums::BodyMode;

/// Drop the torque accumulated during the previous tick.
pub fn clear_torques(world: &mut World) {
    for (_entity, body) in world.query_mut::<&mut RigidBody>() {
        body.torque = glam::Vec3::ZERO;
    }
}

/// Advance every dynamic body by `dt`.
pub fn step(world: &mut World, dt: f32) {
    for (_entity, (transform, body)) in world.query_mut::<(&mut Transform, &mut RigidBody)>() {
        if body.mode != BodyMode::Dynamic {
            continue;
        }

        let inertia = body.inertia();
        if inertia > 0.0 {
            body.angular_velocity += body.torque / inertia * dt;
        }
        body.angular_velocity =
            (body.angular_velocity * ROLLING_DAMPING).clamp_length_max(MAX_ANGULAR_SPEED);

        // No-slip: the contact point under the sphere is at rest.
        body.linear_velocity = body.angular_velocity.cross(UP * body.radius);
        transform.translation += body.linear_velocity * dt;

        let spin = body.angular_velocity * dt;
        if spin.length_squared() > 0.0 {
            transform.rotation = (Quat::from_scaled_axis(spin) * transform.rotation).normalize();
        }
    }
}
