//! Autopilot input: drags the joystick toward the nearest standing pin.
//!
//! Runs on its own input thread and only ever talks to the simulation through
//! the host command channel.

use std::sync::Arc;
use std::thread::JoinHandle;

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use rollball_core::commands::PlayerCommand;
use rollball_core::input::Joystick;
use rollball_core::state::GameStateSnapshot;

use crate::game_loop::TICK_DURATION;
use crate::host;
use crate::state::AppState;

/// Joystick points per meter of ball-to-pin offset.
const DRAG_POINTS_PER_METER: f32 = 100.0;

/// Max random wobble added to each drag axis (points).
const DRAG_JITTER: f32 = 2.0;

/// Seeded joystick driver.
pub struct Autopilot {
    rng: ChaCha8Rng,
    joystick: Joystick,
    last: Option<PlayerCommand>,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            joystick: Joystick::new(),
            last: None,
        }
    }

    /// Decide the next command from a snapshot. Returns `None` when the
    /// command would repeat the previous one.
    pub fn step(&mut self, snapshot: &GameStateSnapshot) -> Option<PlayerCommand> {
        let jitter_x = self.rng.gen_range(-DRAG_JITTER..=DRAG_JITTER);
        let jitter_y = self.rng.gen_range(-DRAG_JITTER..=DRAG_JITTER);

        let target = if snapshot.is_game_over() {
            None
        } else {
            nearest_standing_pin(snapshot)
        };

        let command = match target {
            // Screen +y is toward the viewer, which is world +z.
            Some(offset) => self.joystick.drag_changed(
                offset.x * DRAG_POINTS_PER_METER + jitter_x,
                offset.z * DRAG_POINTS_PER_METER + jitter_y,
            ),
            None => self.joystick.drag_ended(),
        };

        if self.last == Some(command) {
            return None;
        }
        self.last = Some(command);
        Some(command)
    }

    pub fn knob(&self) -> (f32, f32) {
        self.joystick.knob
    }
}

/// Offset from the ball to the closest pin that is still standing.
pub fn nearest_standing_pin(snapshot: &GameStateSnapshot) -> Option<Vec3> {
    let ball = snapshot.ball.as_ref()?.position;
    snapshot
        .pins
        .iter()
        .filter(|p| !p.rotated)
        .map(|p| p.position - ball)
        .min_by(|a, b| a.length_squared().total_cmp(&b.length_squared()))
}

/// Spawns the input thread. It polls the latest snapshot once per tick and
/// stops when the host shuts down or the game loop goes away.
pub fn spawn_input_thread(state: Arc<AppState>, seed: u64) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("rollball-input".into())
        .spawn(move || {
            let mut pilot = Autopilot::new(seed);
            while host::is_running(&state) {
                if let Ok(Some(snapshot)) = host::get_snapshot(&state) {
                    if let Some(command) = pilot.step(&snapshot) {
                        log::debug!("autopilot: {:?}", command);
                        if let Err(err) = host::send_command(&state, command) {
                            log::debug!("input thread stopping: {err}");
                            break;
                        }
                    }
                }
                std::thread::sleep(TICK_DURATION);
            }
        })
}
