use serde::{Deserialize, Serialize};

use crate::types::Direction;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Every tick's input for one run: enough, together with the seed and the
/// board config, to reproduce the run exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub direction: Option<Direction>,
    pub elapsed_ms: u64,
}

impl InputJournal {
    pub fn new(seed: u64) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, inputs: Vec::new() }
    }

    /// Records the input fed to one `advance_tick` call.
    pub fn append_tick(&mut self, direction: Option<Direction>, elapsed_ms: u64) -> &InputRecord {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, direction, elapsed_ms });
        &self.inputs[self.inputs.len() - 1]
    }
}
