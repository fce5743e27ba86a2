//! Game session: rule state for one playthrough.
//!
//! Stored in `SimulationEngine`, NOT as ECS components. Ball and pin state
//! live in side tables keyed by the hecs entity of the body they belong to.
//! A session is built by `world_setup::setup_session` and dropped on retry.

use std::collections::HashMap;

use hecs::Entity;

use rollball_core::components::{BallState, PinState};
use rollball_core::events::GameEvent;

#[derive(Debug, Default)]
pub struct GameSession {
    /// The single player-controlled ball.
    pub(crate) ball: Option<Entity>,
    pub(crate) ball_states: HashMap<Entity, BallState>,
    pub(crate) pins: HashMap<Entity, PinState>,
    /// Latched by the win evaluator. Never cleared within a session.
    pub(crate) game_over: bool,
    pub(crate) empty_pins_warned: bool,
    /// Events not yet handed to the presentation layer.
    pub(crate) events: Vec<GameEvent>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the ball entity with a fresh control state.
    pub fn insert_ball(&mut self, entity: Entity) {
        self.ball = Some(entity);
        self.ball_states.insert(entity, BallState::default());
    }

    /// Register a standing pin.
    pub fn insert_pin(&mut self, entity: Entity, index: u32) {
        self.pins.insert(
            entity,
            PinState {
                rotated: false,
                index,
            },
        );
    }

    pub fn ball(&self) -> Option<Entity> {
        self.ball
    }

    pub fn ball_state(&self) -> Option<&BallState> {
        self.ball.and_then(|ball| self.ball_states.get(&ball))
    }

    pub fn pin(&self, entity: Entity) -> Option<&PinState> {
        self.pins.get(&entity)
    }

    /// Pin entities ordered by layout index.
    pub fn pin_entities(&self) -> Vec<Entity> {
        let mut pins: Vec<(u32, Entity)> = self
            .pins
            .iter()
            .map(|(entity, state)| (state.index, *entity))
            .collect();
        pins.sort_by_key(|(index, _)| *index);
        pins.into_iter().map(|(_, entity)| entity).collect()
    }

    pub fn pin_count(&self) -> u32 {
        self.pins.len() as u32
    }

    pub fn pins_knocked(&self) -> u32 {
        self.pins.values().filter(|pin| pin.rotated).count() as u32
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Take all pending events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
