//! Snapshot system: reads the world and session and builds a GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use glam::Vec3;
use hecs::World;

use rollball_core::components::{PinRotation, Transform};
use rollball_core::enums::GamePhase;
use rollball_core::events::GameEvent;
use rollball_core::state::*;
use rollball_core::types::SimTime;

use crate::session::GameSession;

/// Build a complete GameStateSnapshot from the current world and session.
pub fn build_snapshot(
    world: &World,
    session: &GameSession,
    time: &SimTime,
    applied_torque: Vec3,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let phase = if session.is_game_over() {
        GamePhase::GameOver
    } else {
        GamePhase::Playing
    };

    GameStateSnapshot {
        time: *time,
        phase,
        ball: build_ball(world, session, applied_torque),
        pins: build_pins(world, session),
        pins_knocked: session.pins_knocked(),
        pins_total: session.pin_count(),
        events,
    }
}

fn build_ball(world: &World, session: &GameSession, applied_torque: Vec3) -> Option<BallView> {
    let ball = session.ball()?;
    let position = world.get::<&Transform>(ball).ok()?.translation;
    Some(BallView {
        position,
        commanded_direction: session.ball_state().and_then(|s| s.commanded_direction),
        applied_torque,
    })
}

fn build_pins(world: &World, session: &GameSession) -> Vec<PinView> {
    let mut pins: Vec<PinView> = session
        .pins
        .iter()
        .filter_map(|(entity, state)| {
            let transform = *world.get::<&Transform>(*entity).ok()?;
            Some(PinView {
                index: state.index,
                position: transform.translation,
                yaw: transform.yaw(),
                rotated: state.rotated,
                animating: world.get::<&PinRotation>(*entity).is_ok(),
            })
        })
        .collect();

    pins.sort_by_key(|p| p.index);
    pins
}
