//! Per-tick advancement: queued player move, cadence-gated bot moves, then the
//! single capture check.

use super::Simulation;
use super::pathfinding::manhattan;
use super::policy::plan_bot_step;
use crate::types::*;

impl Simulation {
    pub fn advance_tick(&mut self, elapsed_ms: u64) -> TickResult {
        if let Some(outcome) = self.outcome {
            self.pending_direction = None;
            return TickResult {
                tick: self.tick,
                player_moved: false,
                bots_acted: false,
                bot_moves: Vec::new(),
                outcome: Some(outcome),
            };
        }

        let player_moved = self.apply_player_move();

        self.since_bot_move_ms = self.since_bot_move_ms.saturating_add(elapsed_ms);
        let bots_acted = self.since_bot_move_ms >= self.config.bot_move_interval_ms;
        let bot_moves = if bots_acted {
            self.since_bot_move_ms = 0;
            self.move_bots()
        } else {
            Vec::new()
        };

        self.tick += 1;
        self.outcome = self.capture_check();
        if let Some(RunOutcome::Caught { bot }) = self.outcome {
            tracing::info!(tick = self.tick, bot, "player caught");
            self.log.push(LogEvent::PlayerCaught { bot, tick: self.tick });
        }

        TickResult { tick: self.tick, player_moved, bots_acted, bot_moves, outcome: self.outcome }
    }

    fn apply_player_move(&mut self) -> bool {
        let Some(direction) = self.pending_direction.take() else {
            return false;
        };
        let from = self.state.player;
        if !self.state.move_player(direction) {
            return false;
        }
        self.log.push(LogEvent::PlayerMoved { from, to: self.state.player });
        true
    }

    // Bots act in index order against the live board, so a bot that already
    // moved this tick can block the ones after it.
    fn move_bots(&mut self) -> Vec<BotMove> {
        let mut moves = Vec::with_capacity(self.state.bots.len());
        for bot in 0..self.state.bots.len() {
            let decision = plan_bot_step(&self.state, bot);
            tracing::debug!(tick = self.tick, bot, branch = ?decision.branch, "bot decision");
            self.log.push(LogEvent::PolicyChosen { bot, branch: decision.branch });

            let from = self.state.bots[bot];
            let moved = decision.step.is_some_and(|step| self.state.move_bot(bot, step));
            if moved {
                self.log.push(LogEvent::BotMoved { bot, from, to: self.state.bots[bot] });
            }
            moves.push(BotMove { bot, decision, moved });
        }
        moves
    }

    fn capture_check(&self) -> Option<RunOutcome> {
        let player = self.state.player;
        self.state
            .bots
            .iter()
            .position(|bot| manhattan(*bot, player) <= 1)
            .map(|bot| RunOutcome::Caught { bot })
    }
}
