//! The pursuit simulation: owns the board, the queued player input and the
//! bot cadence clock. Submodules split construction, pathfinding, the bot
//! policy and per-tick advancement.

use std::mem;

use crate::config::SimConfig;
use crate::state::{SimState, Snapshot};
use crate::types::*;

mod hash;
mod pathfinding;
mod policy;
mod spawn;
mod tick;

#[cfg(test)]
mod test_support;

pub use pathfinding::{direction_towards, manhattan};

pub struct Simulation {
    seed: u64,
    tick: u64,
    config: SimConfig,
    state: SimState,
    pending_direction: Option<Direction>,
    // Time accumulated since bots last moved, in milliseconds.
    since_bot_move_ms: u64,
    outcome: Option<RunOutcome>,
    log: Vec<LogEvent>,
}

impl Simulation {
    /// Queues the player's move for the next tick. A later call before the tick
    /// replaces the earlier one; `None` clears it.
    pub fn submit_player_direction(&mut self, direction: Option<Direction>) {
        self.pending_direction = direction;
    }

    /// What the pursuit policy would do for `bot` against the current board.
    pub fn plan_bot(&self, bot: usize) -> Option<BotDecision> {
        (bot < self.state.bots.len()).then(|| policy::plan_bot_step(&self.state, bot))
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    /// Hands over every event logged so far and starts a fresh log. Long-running
    /// front ends call this each frame so the log stays bounded.
    pub fn take_log(&mut self) -> Vec<LogEvent> {
        mem::take(&mut self.log)
    }
}
