//! Roll-a-ball host application.
//!
//! This crate wires the simulation engine to a game loop thread, an input
//! thread, and a logging presentation layer.

pub mod autopilot;
pub mod game_loop;
pub mod host;
pub mod state;

pub use rollball_core as core;
