//! Win evaluator: latches game over once every pin is knocked.

use rollball_core::events::GameEvent;

use crate::session::GameSession;

/// Evaluate the win condition. Returns true on the tick the game ends.
///
/// An empty pin set is a misconfiguration and never counts as a win.
pub fn run(session: &mut GameSession, tick: u64) -> bool {
    if session.game_over {
        return false;
    }

    if session.pins.is_empty() {
        if !session.empty_pins_warned {
            log::warn!("no pins in session; win condition disabled");
            session.empty_pins_warned = true;
        }
        return false;
    }

    if !session.pins.values().all(|pin| pin.rotated) {
        return false;
    }

    session.game_over = true;
    let pins_knocked = session.pins_knocked();
    log::info!("all {pins_knocked} pins knocked at tick {tick}; game over");
    session.events.push(GameEvent::GameOver { pins_knocked, tick });
    true
}
