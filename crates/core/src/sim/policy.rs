//! Bot decision policy: lunge when adjacent, hold back when an ally already is,
//! otherwise take the first step of a shortest path to the player.

use super::pathfinding::{bfs_first_step, direction_towards, manhattan};
use crate::state::SimState;
use crate::types::{BotDecision, PolicyBranch};

pub(super) fn plan_bot_step(state: &SimState, bot: usize) -> BotDecision {
    let position = state.bots[bot];
    let player = state.player;

    if manhattan(position, player) == 1 {
        return BotDecision {
            branch: PolicyBranch::AdjacentChase,
            step: Some(direction_towards(position, player)),
        };
    }

    let ally_adjacent = state
        .bots
        .iter()
        .enumerate()
        .any(|(other, pos)| other != bot && manhattan(*pos, player) == 1);
    if ally_adjacent {
        return BotDecision { branch: PolicyBranch::DeferToAlly, step: None };
    }

    match bfs_first_step(&state.grid, position, player) {
        Some(path) => BotDecision {
            branch: PolicyBranch::PathStep { path_len: path.path_len },
            step: Some(path.direction),
        },
        None => BotDecision { branch: PolicyBranch::Unreachable, step: None },
    }
}
