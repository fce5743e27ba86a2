//! Entity spawn factories for setting up a game session.
//!
//! Creates the ball and the pin set with their component bundles and
//! registers them in a new `GameSession`.

use glam::Vec3;
use hecs::World;

use rollball_core::components::*;

use crate::assets::{AssetCatalog, BodyTemplate};
use crate::engine::SimConfig;
use crate::error::SetupError;
use crate::session::GameSession;

/// Set up a session: the ball at the origin plus one pin per layout slot.
///
/// All assets are resolved before anything is spawned, so a failed setup
/// leaves the world untouched.
pub fn setup_session(
    world: &mut World,
    config: &SimConfig,
    catalog: &AssetCatalog,
) -> Result<GameSession, SetupError> {
    if config.pin_layout.is_empty() {
        return Err(SetupError::EmptyPinLayout);
    }
    let ball_template = catalog.load(&config.ball_asset)?;
    let pin_template = catalog.load(&config.pin_asset)?;

    let mut session = GameSession::new();
    session.insert_ball(spawn_ball(world, &ball_template));

    for (index, position) in config.pin_layout.iter().enumerate() {
        let pin = spawn_pin(world, &pin_template, *position);
        session.insert_pin(pin, index as u32);
    }

    log::info!("session ready: ball + {} pins", session.pin_count());
    Ok(session)
}

/// Spawn the ball at the origin of the play plane.
pub fn spawn_ball(world: &mut World, template: &BodyTemplate) -> hecs::Entity {
    world.spawn((Ball, Transform::default(), template.instantiate()))
}

/// Spawn a standing pin at `position`.
pub fn spawn_pin(world: &mut World, template: &BodyTemplate, position: Vec3) -> hecs::Entity {
    world.spawn((
        Pin,
        Transform::from_translation(position),
        template.instantiate(),
    ))
}
