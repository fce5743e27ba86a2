//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is built by the caller so setup errors surface before the thread
//! starts. Commands arrive via `mpsc` channel. Events are forwarded to the
//! presentation side and the latest snapshot is stored for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rollball_core::constants::TICK_RATE;
use rollball_core::events::GameEvent;
use rollball_core::state::GameStateSnapshot;
use rollball_sim::SimulationEngine;

use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Upper bound on the time scale.
pub const MAX_TIME_SCALE: f64 = 4.0;

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use and the thread handle.
/// The loop stops on `Shutdown`, channel disconnect, or after `max_ticks`.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    event_tx: mpsc::Sender<GameEvent>,
    max_ticks: Option<u64>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("rollball-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot, &event_tx, max_ticks);
        })?;

    Ok((cmd_tx, handle))
}

/// Tick duration at the given time scale. Non-positive scales run at 1x.
pub fn effective_tick_duration(time_scale: f64) -> Duration {
    let time_scale = time_scale.clamp(0.0, MAX_TIME_SCALE);
    if time_scale > 0.001 {
        TICK_DURATION.div_f64(time_scale)
    } else {
        TICK_DURATION
    }
}

fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    event_tx: &mpsc::Sender<GameEvent>,
    max_ticks: Option<u64>,
) {
    let mut next_tick_time = Instant::now();
    let tick_duration = effective_tick_duration(engine.time_scale());
    log::info!("game loop started ({:?} per tick)", tick_duration);

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    log::info!("game loop shut down at tick {}", engine.time().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Forward events to the presentation side
        for event in &snapshot.events {
            let _ = event_tx.send(event.clone());
        }

        // 4. Store latest snapshot for polling
        let tick = snapshot.time.tick;
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if max_ticks.is_some_and(|max| tick >= max) {
            log::info!("game loop reached tick limit {tick}");
            return;
        }

        // 5. Sleep until next tick
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
