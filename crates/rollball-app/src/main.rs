use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use rollball_app::state::AppState;
use rollball_app::{autopilot, host};
use rollball_core::events::GameEvent;
use rollball_sim::{SimConfig, SimulationEngine};

#[derive(Parser, Debug)]
#[command(name = "rollball", about = "Roll the ball into every pin")]
struct Args {
    /// JSON file with simulation settings. Missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop after this many ticks.
    #[arg(long, default_value_t = 3600)]
    max_ticks: u64,

    /// Seed for the autopilot's drag jitter.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Run without the autopilot input thread.
    #[arg(long)]
    no_autopilot: bool,

    /// Override the configured time scale (0 to 4).
    #[arg(long)]
    time_scale: Option<f64>,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    ticks: u64,
    pins_knocked: u32,
    pins_total: u32,
    game_over: bool,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn present(event: &GameEvent) {
    match event {
        GameEvent::PinKnocked {
            pin_index,
            rotation_sign,
            tick,
        } => log::info!("tick {tick}: pin {pin_index} knocked (turn {rotation_sign:+})"),
        GameEvent::GameOver { pins_knocked, tick } => {
            log::info!("tick {tick}: all {pins_knocked} pins down");
            println!("Game Over! All pins have been knocked over.");
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(time_scale) = args.time_scale {
        config.time_scale = time_scale;
    }
    let engine = SimulationEngine::new(config).context("failed to set up session")?;

    let state = Arc::new(AppState::new());
    let (event_tx, event_rx) = mpsc::channel();
    let loop_handle = host::start_simulation(&state, engine, event_tx, Some(args.max_ticks))?;

    let input_handle = if args.no_autopilot {
        None
    } else {
        Some(
            autopilot::spawn_input_thread(state.clone(), args.seed)
                .context("failed to spawn input thread")?,
        )
    };

    // Ends when the game loop exits and drops its sender.
    for event in event_rx {
        present(&event);
        if matches!(event, GameEvent::GameOver { .. }) {
            host::shutdown(&state)?;
        }
    }
    host::shutdown(&state)?;

    if loop_handle.join().is_err() {
        anyhow::bail!("game loop thread panicked");
    }
    if let Some(handle) = input_handle {
        if handle.join().is_err() {
            anyhow::bail!("input thread panicked");
        }
    }

    let snapshot = host::get_snapshot(&state)?.unwrap_or_default();
    let summary = RunSummary {
        ticks: snapshot.time.tick,
        pins_knocked: snapshot.pins_knocked,
        pins_total: snapshot.pins_total,
        game_over: snapshot.is_game_over(),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
