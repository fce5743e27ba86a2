//! Simulation engine for the roll-a-ball bowling game.
//!
//! Owns the hecs world and the game session, runs systems at a fixed
//! tick rate, and produces GameStateSnapshots for the presentation layer.

pub mod assets;
pub mod controller;
pub mod engine;
pub mod error;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use error::SetupError;
pub use rollball_core as core;

#[cfg(test)]
mod tests;
