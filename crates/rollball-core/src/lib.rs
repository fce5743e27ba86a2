//! Core types and definitions for the roll-a-ball bowling game.
//!
//! This crate defines the vocabulary shared across the other crates:
//! directions, components, commands, events, input translation,
//! state snapshots, and constants. It has no dependency on an engine
//! or runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;
