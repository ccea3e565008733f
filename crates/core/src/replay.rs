use thiserror::Error;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::journal::{InputJournal, JOURNAL_FORMAT_VERSION};
use crate::sim::Simulation;
use crate::types::RunOutcome;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("unsupported journal format version {0}")]
    UnsupportedFormat(u16),

    #[error("journal seed does not produce a valid board: {0}")]
    Setup(#[from] SimError),

    #[error("journal continues after the run finished (record {seq})")]
    InputAfterFinish { seq: u64 },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_tick: u64,
    pub outcome: Option<RunOutcome>,
    pub final_snapshot_hash: u64,
}

/// Rebuilds the run from its seed and feeds every recorded tick back in.
pub fn replay_to_end(
    config: &SimConfig,
    journal: &InputJournal,
) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedFormat(journal.format_version));
    }

    let mut sim = Simulation::new(journal.seed, config)?;
    for record in &journal.inputs {
        if sim.is_finished() {
            return Err(ReplayError::InputAfterFinish { seq: record.seq });
        }
        sim.submit_player_direction(record.direction);
        sim.advance_tick(record.elapsed_ms);
    }

    Ok(ReplayResult {
        final_tick: sim.current_tick(),
        outcome: sim.outcome(),
        final_snapshot_hash: sim.snapshot_hash(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn record_run(seed: u64, config: &SimConfig, moves: &[Option<Direction>]) -> (u64, InputJournal) {
        let mut sim = Simulation::new(seed, config).expect("spawn");
        let mut journal = InputJournal::new(seed);
        for direction in moves.iter().copied().cycle().take(400) {
            if sim.is_finished() {
                break;
            }
            sim.submit_player_direction(direction);
            sim.advance_tick(100);
            journal.append_tick(direction, 100);
        }
        (sim.snapshot_hash(), journal)
    }

    #[test]
    fn replay_matches_live_run() {
        let config = SimConfig::default();
        let moves = [Some(Direction::Left), None, Some(Direction::Up), Some(Direction::Right)];
        let (live_hash, journal) = record_run(2024, &config, &moves);

        let replayed = replay_to_end(&config, &journal).expect("replay should succeed");
        assert_eq!(replayed.final_snapshot_hash, live_hash);
        assert_eq!(replayed.final_tick, journal.inputs.len() as u64);
    }

    #[test]
    fn replay_rejects_unknown_format() {
        let mut journal = InputJournal::new(1);
        journal.format_version = 99;
        assert_eq!(
            replay_to_end(&SimConfig::default(), &journal),
            Err(ReplayError::UnsupportedFormat(99))
        );
    }

    #[test]
    fn replay_rejects_inputs_past_capture() {
        // Standing still on the classic board always ends in capture well before
        // 400 ticks; pad the journal past that point.
        let config = SimConfig::default();
        let (_, mut journal) = record_run(5, &config, &[None]);
        let finished_at = journal.inputs.len() as u64;
        assert!(finished_at < 400, "idle player should be caught");
        journal.append_tick(None, 100);
        assert_eq!(
            replay_to_end(&config, &journal),
            Err(ReplayError::InputAfterFinish { seq: finished_at })
        );
    }

    #[test]
    fn replay_surfaces_setup_errors() {
        let config = SimConfig::open(3, 1, 1);
        assert_eq!(
            replay_to_end(&config, &InputJournal::new(1)),
            Err(ReplayError::Setup(SimError::SeparationUnsatisfiable { min_distance: 5 }))
        );
    }
}
