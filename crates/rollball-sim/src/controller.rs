//! Ball controller: input-driven changes to the ball's commanded direction.
//!
//! Both operations overwrite the stored value; there is no blending between
//! directions. Sessions without a ball ignore them.

use rollball_core::enums::Direction;

use crate::session::GameSession;

/// Command the ball to roll toward `direction` until stopped or redirected.
/// Returns false if the session has no ball.
pub fn start_applying_force(session: &mut GameSession, direction: Direction) -> bool {
    let Some(state) = session
        .ball
        .and_then(|ball| session.ball_states.get_mut(&ball))
    else {
        return false;
    };

    if state.commanded_direction != Some(direction) {
        log::debug!("ball direction -> {direction:?}");
    }
    state.commanded_direction = Some(direction);
    true
}

/// Clear the commanded direction. Returns false if the session has no ball.
pub fn stop_applying_force(session: &mut GameSession) -> bool {
    let Some(state) = session
        .ball
        .and_then(|ball| session.ball_states.get_mut(&ball))
    else {
        return false;
    };

    if state.commanded_direction.take().is_some() {
        log::debug!("ball direction -> none");
    }
    true
}
