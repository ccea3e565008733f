use anyhow::{Result, bail};
use clap::Parser;
use pursuit_core::sim::manhattan;
use pursuit_core::{CellKind, Direction, SimConfig, Simulation};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of consecutive seeds to run, starting at `seed`
    #[arg(short, long, default_value_t = 100)]
    runs: u64,
    #[arg(short, long, default_value_t = 1000)]
    ticks: u32,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn fuzz_one(config: &SimConfig, seed: u64, ticks: u32) -> Result<Option<u64>> {
    let mut sim = Simulation::new(seed, config)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let inputs = [
        None,
        Some(Direction::Up),
        Some(Direction::Down),
        Some(Direction::Left),
        Some(Direction::Right),
    ];

    for _ in 0..ticks {
        sim.submit_player_direction(choose(&mut rng, &inputs));
        let result = sim.advance_tick(choose(&mut rng, &[50, 100, 250]));

        // Assert invariants
        let state = sim.state();
        if !state.occupancy_consistent() {
            bail!("Invariant failed: occupancy drift on seed {seed}");
        }
        let occupied = sim
            .snapshot()
            .cells
            .iter()
            .filter(|c| matches!(c, CellKind::Player | CellKind::Bot))
            .count();
        if occupied != 1 + config.bot_count {
            bail!("Invariant failed: {occupied} occupied cells on seed {seed}");
        }
        let caught = state.bots().iter().any(|bot| manhattan(*bot, state.player()) <= 1);
        if caught != result.is_terminal() {
            bail!("Invariant failed: capture check disagrees with positions on seed {seed}");
        }
        if result.is_terminal() {
            return Ok(Some(result.tick));
        }
    }
    Ok(None)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    let config = SimConfig::default();

    println!(
        "Starting Fuzz harness on seeds {}..{} for max {} ticks...",
        args.seed,
        args.seed + args.runs,
        args.ticks
    );
    let mut caught = 0u64;
    for seed in args.seed..args.seed + args.runs {
        match fuzz_one(&config, seed, args.ticks)? {
            Some(tick) => {
                tracing::debug!(seed, tick, "player caught");
                caught += 1;
            }
            None => tracing::debug!(seed, "tick budget exhausted"),
        }
    }

    println!("Fuzzing completed successfully: {caught}/{} runs ended in capture.", args.runs);
    Ok(())
}
