//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs world and the game session, processes
//! player commands, runs all systems, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::{HashSet, VecDeque};

use glam::Vec3;
use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use rollball_core::commands::PlayerCommand;
use rollball_core::constants::*;
use rollball_core::enums::{Direction, GamePhase, PhysicsBackend};
use rollball_core::state::GameStateSnapshot;
use rollball_core::types::SimTime;

use crate::assets::AssetCatalog;
use crate::controller;
use crate::error::SetupError;
use crate::session::GameSession;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Torque magnitude applied while a direction is held.
    pub torque_strength: f32,
    /// Pin positions on the play plane. One pin per entry.
    pub pin_layout: Vec<Vec3>,
    /// Duration of a knocked pin's quarter turn (seconds).
    pub pin_rotation_secs: f32,
    pub ball_asset: String,
    pub pin_asset: String,
    pub physics: PhysicsBackend,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            torque_strength: TORQUE_STRENGTH,
            pin_layout: DEFAULT_PIN_LAYOUT.to_vec(),
            pin_rotation_secs: PIN_ROTATION_SECS,
            ball_asset: BALL_ASSET.to_string(),
            pin_asset: PIN_ASSET.to_string(),
            physics: PhysicsBackend::Headless,
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the world and all session state.
pub struct SimulationEngine {
    config: SimConfig,
    catalog: AssetCatalog,
    world: World,
    session: GameSession,
    time: SimTime,
    command_queue: VecDeque<PlayerCommand>,
    /// Torque applied to the ball during the last tick.
    applied_torque: Vec3,
    /// Pins currently in contact with the ball (headless backend).
    touching: HashSet<Entity>,
    contact_buffer: Vec<(Entity, Entity)>,
    finished_buffer: Vec<Entity>,
}

impl SimulationEngine {
    /// Create an engine with the default asset catalog.
    pub fn new(config: SimConfig) -> Result<Self, SetupError> {
        Self::with_catalog(config, AssetCatalog::default())
    }

    /// Create an engine resolving assets from `catalog`. Fails if setup fails.
    pub fn with_catalog(config: SimConfig, catalog: AssetCatalog) -> Result<Self, SetupError> {
        let mut world = World::new();
        let session = world_setup::setup_session(&mut world, &config, &catalog)?;

        Ok(Self {
            config,
            catalog,
            world,
            session,
            time: SimTime::default(),
            command_queue: VecDeque::new(),
            applied_torque: Vec3::ZERO,
            touching: HashSet::new(),
            contact_buffer: Vec::new(),
            finished_buffer: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Command the ball toward `direction`, effective from the next tick.
    pub fn start_applying_force(&mut self, direction: Direction) {
        controller::start_applying_force(&mut self.session, direction);
    }

    /// Stop commanding the ball.
    pub fn stop_applying_force(&mut self) {
        controller::stop_applying_force(&mut self.session);
    }

    /// Collision-begin callback. Hosts with their own physics call this for
    /// every new contact pair; the headless backend calls it itself.
    /// Returns true if a pin was knocked.
    pub fn on_collision(&mut self, a: Entity, b: Entity) -> bool {
        systems::collision::run(
            &mut self.world,
            &mut self.session,
            a,
            b,
            self.config.pin_rotation_secs,
            self.time.tick,
        )
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();
        self.run_systems();
        self.time.advance();

        let events = self.session.drain_events();
        systems::snapshot::build_snapshot(
            &self.world,
            &self.session,
            &self.time,
            self.applied_torque,
            events,
        )
    }

    /// Tear down the session and set up a fresh one from the same config.
    pub fn restart(&mut self) -> Result<(), SetupError> {
        let mut world = World::new();
        let session = world_setup::setup_session(&mut world, &self.config, &self.catalog)?;

        self.world = world;
        self.session = session;
        self.time = SimTime::default();
        self.applied_torque = Vec3::ZERO;
        self.touching.clear();
        log::info!("session restarted");
        Ok(())
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        if self.session.is_game_over() {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.config.time_scale
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn ball_entity(&self) -> Option<Entity> {
        self.session.ball()
    }

    /// Pin entities ordered by layout index.
    pub fn pin_entities(&self) -> Vec<Entity> {
        self.session.pin_entities()
    }

    /// Get a mutable reference to the world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get a mutable reference to the session (for tests).
    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartApplyingForce { direction } => {
                self.start_applying_force(direction);
            }
            PlayerCommand::StopApplyingForce => {
                self.stop_applying_force();
            }
            PlayerCommand::Retry => {
                if let Err(err) = self.restart() {
                    log::error!("retry failed: {err}");
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Ball torque (continuous: cleared, then re-applied)
        systems::rigid_body::clear_torques(&mut self.world);
        self.applied_torque = systems::ball_physics::run(
            &mut self.world,
            &self.session,
            self.config.torque_strength,
        );

        // 2. Rigid-body step and contacts, unless a host engine owns physics
        if self.config.physics == PhysicsBackend::Headless {
            systems::rigid_body::step(&mut self.world, DT);

            if let Some(ball) = self.session.ball() {
                systems::contacts::detect(
                    &self.world,
                    ball,
                    &mut self.touching,
                    &mut self.contact_buffer,
                );
            }

            // 3. Collision handler for each new contact
            let contacts = std::mem::take(&mut self.contact_buffer);
            for &(a, b) in &contacts {
                self.on_collision(a, b);
            }
            self.contact_buffer = contacts;
        }

        // 4. Pin knock animations
        systems::pin_animation::run(&mut self.world, DT, &mut self.finished_buffer);
        // 5. Win evaluation
        systems::win_check::run(&mut self.session, self.time.tick);
    }
}
