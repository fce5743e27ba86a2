//! Host-side handlers.
//!
//! The presentation layer calls these to start the game loop, forward input,
//! and poll the latest snapshot. They bridge host requests to the game loop
//! thread via channels.

use std::sync::mpsc;
use std::thread::JoinHandle;

use anyhow::{anyhow, bail, Context};

use rollball_core::commands::PlayerCommand;
use rollball_core::events::GameEvent;
use rollball_core::input::{self, InputEvent};
use rollball_core::state::GameStateSnapshot;
use rollball_sim::SimulationEngine;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(
    state: &AppState,
    engine: SimulationEngine,
    event_tx: mpsc::Sender<GameEvent>,
    max_ticks: Option<u64>,
) -> anyhow::Result<JoinHandle<()>> {
    let mut running = state.running.lock().map_err(|e| anyhow!(e.to_string()))?;

    if *running {
        bail!("simulation already running");
    }

    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(engine, state.latest_snapshot.clone(), event_tx, max_ticks)
            .context("failed to spawn game loop thread")?;

    let mut tx_lock = state.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    Ok(handle)
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> anyhow::Result<()> {
    send(state, GameLoopCommand::Player(command))
}

/// Translate a joystick or button event and send the resulting command.
pub fn send_input(state: &AppState, event: InputEvent) -> anyhow::Result<()> {
    send_command(state, input::translate(event))
}

/// Get the latest snapshot (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> anyhow::Result<Option<GameStateSnapshot>> {
    let lock = state
        .latest_snapshot
        .lock()
        .map_err(|e| anyhow!(e.to_string()))?;
    Ok(lock.clone())
}

/// Whether the game loop has been started and not shut down.
pub fn is_running(state: &AppState) -> bool {
    state.running.lock().map(|r| *r).unwrap_or(false)
}

/// Ask the game loop to stop. A loop that already exited is not an error.
pub fn shutdown(state: &AppState) -> anyhow::Result<()> {
    let mut running = state.running.lock().map_err(|e| anyhow!(e.to_string()))?;
    if !*running {
        return Ok(());
    }
    *running = false;

    let tx_lock = state.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;
    if let Some(tx) = tx_lock.as_ref() {
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    Ok(())
}

fn send(state: &AppState, command: GameLoopCommand) -> anyhow::Result<()> {
    let tx_lock = state.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(command)
            .map_err(|e| anyhow!("failed to send command: {e}")),
        None => bail!("simulation not started"),
    }
}
