use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pursuit_core::journal_file::{JournalWriter, load_journal_from_file};
use pursuit_core::{Direction, InputJournal, ReplayResult, SimConfig, Simulation, replay_to_end};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board config in TOML; the classic 10x10 board when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a headless game with a random-walk player
    Run {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, default_value_t = 1000)]
        ticks: u32,
        /// Write every tick's input to a JSONL journal
        #[arg(short, long)]
        record: Option<PathBuf>,
    },
    /// Replay a recorded journal (.jsonl, or a JSON dump of the whole journal)
    Replay {
        #[arg(short, long)]
        journal: PathBuf,
    },
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

fn load_journal(path: &Path) -> Result<InputJournal> {
    if path.extension().is_some_and(|ext| ext == "jsonl") {
        return load_journal_from_file(path)
            .with_context(|| format!("Failed to load journal file: {}", path.display()));
    }
    let journal_data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file: {}", path.display()))?;
    serde_json::from_str(&journal_data).with_context(|| "Failed to deserialize journal JSON")
}

fn run(config: &SimConfig, seed: u64, ticks: u32, record: Option<&Path>) -> Result<()> {
    let mut sim = Simulation::new(seed, config).context("Failed to set up the board")?;
    let mut writer = record
        .map(|path| {
            JournalWriter::create(path, seed)
                .with_context(|| format!("Failed to create journal: {}", path.display()))
        })
        .transpose()?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let elapsed_ms = config.tick_interval_ms();

    for _ in 0..ticks {
        let direction = Direction::ALL[rng.next_u64() as usize % Direction::ALL.len()];
        sim.submit_player_direction(Some(direction));
        let result = sim.advance_tick(elapsed_ms);
        if let Some(writer) = writer.as_mut() {
            writer.append(Some(direction), elapsed_ms).context("Failed to append to journal")?;
        }
        if result.is_terminal() {
            break;
        }
    }

    println!("Run complete.");
    println!("Final Tick: {}", sim.current_tick());
    println!("Outcome: {:?}", sim.outcome());
    println!("Snapshot Hash: {}", sim.snapshot_hash());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Run { seed, ticks, record } => run(&config, seed, ticks, record.as_deref()),
        Command::Replay { journal } => {
            let journal = load_journal(&journal)?;
            tracing::info!(seed = journal.seed, inputs = journal.inputs.len(), "replaying journal");
            let result: ReplayResult =
                replay_to_end(&config, &journal).context("Replay failed during execution")?;

            println!("Replay complete.");
            println!("Final Tick: {}", result.final_tick);
            println!("Outcome: {:?}", result.outcome);
            println!("Snapshot Hash: {}", result.final_snapshot_hash);
            Ok(())
        }
    }
}
