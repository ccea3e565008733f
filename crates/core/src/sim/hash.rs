//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::Simulation;
use crate::types::{Pos, RunOutcome};

impl Simulation {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);
        hasher.write_u64(self.since_bot_move_ms);
        write_pos(&mut hasher, self.state.player);
        hasher.write_usize(self.state.bots.len());
        for bot in &self.state.bots {
            write_pos(&mut hasher, *bot);
        }
        match self.outcome {
            None => hasher.write_u8(0),
            Some(RunOutcome::Caught { bot }) => {
                hasher.write_u8(1);
                hasher.write_usize(bot);
            }
        }
        hasher.finish()
    }
}

fn write_pos(hasher: &mut Xxh3, pos: Pos) {
    hasher.write_i32(pos.x);
    hasher.write_i32(pos.y);
}

#[cfg(test)]
mod tests {
    use crate::sim::test_support::*;
    use crate::types::{Direction, Pos};

    #[test]
    fn hash_tracks_positions_and_tick() {
        let mut a = open_simulation(8, Pos { x: 4, y: 4 }, &[Pos { x: 0, y: 0 }]);
        let b = open_simulation(8, Pos { x: 4, y: 4 }, &[Pos { x: 0, y: 0 }]);
        assert_eq!(a.snapshot_hash(), b.snapshot_hash());

        a.submit_player_direction(Some(Direction::Left));
        a.advance_tick(0);
        assert_ne!(a.snapshot_hash(), b.snapshot_hash());
    }
}
