//! Board construction and entity spawning for a new run.
//! This module exists to isolate initialization details from the tick loop.
//! It does not own movement or the bot policy once a run has started.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use super::Simulation;
use super::pathfinding::manhattan;
use crate::config::SimConfig;
use crate::error::SimError;
use crate::grid::Grid;
use crate::state::SimState;
use crate::types::{CellKind, Pos};

// A player spawn can leave no cell far enough away for the bots; retry with a
// fresh player cell a bounded number of times before giving up.
const MAX_SPAWN_ATTEMPTS: usize = 32;

impl Simulation {
    pub fn new(seed: u64, config: &SimConfig) -> Result<Self, SimError> {
        config.validate_layout()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = Grid::with_walls(config.width, config.height, &config.walls);

        let mut last_error = SimError::NoEmptyCell;
        for _ in 0..MAX_SPAWN_ATTEMPTS {
            match spawn_entities(&grid, &mut rng, config.bot_count, config.min_spawn_distance) {
                Ok((player, bots)) => {
                    tracing::info!(seed, ?player, ?bots, "spawned entities");
                    let state = SimState::place(grid, player, bots)?;
                    return Ok(Self::from_state(seed, config, state));
                }
                Err(SimError::NoEmptyCell) => return Err(SimError::NoEmptyCell),
                Err(err) => last_error = err,
            }
        }
        Err(last_error)
    }

    /// Builds a run with fixed positions. The spawn separation rule is not
    /// applied; every position must still be an empty in-range cell.
    pub fn from_layout(config: &SimConfig, player: Pos, bots: Vec<Pos>) -> Result<Self, SimError> {
        config.validate_layout()?;
        let grid = Grid::with_walls(config.width, config.height, &config.walls);
        let mut config = config.clone();
        config.bot_count = bots.len();
        let state = SimState::place(grid, player, bots)?;
        Ok(Self::from_state(0, &config, state))
    }

    fn from_state(seed: u64, config: &SimConfig, state: SimState) -> Self {
        Self {
            seed,
            tick: 0,
            config: config.clone(),
            state,
            pending_direction: None,
            since_bot_move_ms: 0,
            outcome: None,
            log: Vec::new(),
        }
    }
}

fn spawn_entities(
    grid: &Grid,
    rng: &mut ChaCha8Rng,
    bot_count: usize,
    min_distance: u32,
) -> Result<(Pos, Vec<Pos>), SimError> {
    let mut scratch = grid.clone();
    let player = scratch.random_empty_position(rng).ok_or(SimError::NoEmptyCell)?;
    scratch.set_cell(player, CellKind::Player);

    let mut bots = Vec::with_capacity(bot_count);
    for _ in 0..bot_count {
        if !has_spawn_candidate(&scratch, player, min_distance) {
            return Err(SimError::SeparationUnsatisfiable { min_distance });
        }
        let bot = loop {
            let candidate = scratch.random_empty_position(rng).ok_or(SimError::NoEmptyCell)?;
            if manhattan(player, candidate) >= min_distance {
                break candidate;
            }
        };
        scratch.set_cell(bot, CellKind::Bot);
        bots.push(bot);
    }
    Ok((player, bots))
}

fn has_spawn_candidate(grid: &Grid, player: Pos, min_distance: u32) -> bool {
    (0..grid.height() as i32).any(|y| {
        (0..grid.width() as i32).any(|x| {
            let pos = Pos { x, y };
            grid.is_empty(pos) && manhattan(player, pos) >= min_distance
        })
    })
}
