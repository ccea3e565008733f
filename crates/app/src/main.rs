mod render;
mod window_config;

use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result, anyhow};
use macroquad::prelude::*;
use macroquad::window::Conf;
use pursuit_app::app_loop::{AppMode, AppState};
use pursuit_app::frame_input::capture_frame_input;
use pursuit_app::seed::{LaunchArgs, generate_runtime_seed, resolve_launch_args};
use pursuit_app::{format_seed, format_snapshot_hash};
use pursuit_core::journal_file::JournalWriter;
use pursuit_core::{SimConfig, Simulation};
use tracing_subscriber::EnvFilter;

static LAUNCH_ARGS: OnceLock<Result<LaunchArgs, String>> = OnceLock::new();

// Parsed once; the window setup and the run share the same seed.
fn launch_args() -> Result<LaunchArgs> {
    LAUNCH_ARGS
        .get_or_init(|| {
            let args: Vec<String> = env::args().collect();
            resolve_launch_args(&args, generate_runtime_seed)
        })
        .clone()
        .map_err(|err| anyhow!(err))
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    SimConfig::from_toml_str(&raw)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

fn window_conf() -> Conf {
    // Argument errors are reported once the window is up.
    let config = launch_args()
        .and_then(|args| load_config(args.config.as_deref()))
        .unwrap_or_default();
    window_config::build_window_conf(&config)
}

async fn run() -> Result<()> {
    let args = launch_args()?;
    let config = load_config(args.config.as_deref())?;
    let seed = args.seed.value();

    let mut sim = Simulation::new(seed, &config).context("Failed to set up the board")?;
    let mut journal = args
        .record
        .as_deref()
        .map(|path| {
            JournalWriter::create(path, seed)
                .with_context(|| format!("Failed to create journal: {}", path.display()))
        })
        .transpose()?;
    tracing::info!(seed = format_seed(seed), source = ?args.seed, "starting run");

    let mut app = AppState::new(config.tick_interval_ms());
    loop {
        let input = capture_frame_input();
        let frame_ms = (get_frame_time() * 1000.0).round() as u64;
        app.tick(&mut sim, &input, frame_ms);

        if let Some(writer) = journal.as_mut() {
            for accepted in app.accepted_inputs.drain(..) {
                writer
                    .append(accepted.direction, accepted.elapsed_ms)
                    .context("Failed to append to journal")?;
            }
        }
        if app.mode == AppMode::Quit {
            break;
        }

        render::draw_frame(&sim.snapshot(), &app.mode, sim.current_tick());
        next_frame().await;
    }

    tracing::info!(
        tick = sim.current_tick(),
        outcome = ?sim.outcome(),
        hash = format_snapshot_hash(sim.snapshot_hash()),
        "run ended"
    );
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    if let Err(err) = run().await {
        tracing::error!("{err:#}");
        eprintln!("error: {err:#}");
    }
}
