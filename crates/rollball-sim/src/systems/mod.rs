//! Systems that operate on the world and the session each tick.
//!
//! Systems are plain functions over `&mut World` / `&mut GameSession`.
//! They do not own state.

pub mod ball_physics;
pub mod collision;
pub mod contacts;
pub mod pin_animation;
pub mod rigid_body;
pub mod snapshot;
pub mod win_check;
