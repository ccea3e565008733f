//! File-backed JSONL input journal with a SHA-256 hash chain.
//!
//! The file format is line-delimited JSON (`.jsonl`):
//! - Line 1: header with `format_version` and `seed`.
//! - Lines 2+: one record per simulated tick, each carrying a SHA-256 hash
//!   chain (`prev_sha256_hex`, `sha256_hex`) for corruption detection.
//!
//! Writing flushes each record immediately so a crashed session still leaves a
//! replayable prefix. Loading validates every line and stops at the first
//! invalid, incomplete or hash-broken one.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::journal::{InputJournal, InputRecord, JOURNAL_FORMAT_VERSION};
use crate::types::Direction;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
struct FileHeader {
    format_version: u16,
    seed: u64,
}

/// Canonical hash input for a record, concatenated with `prev_sha256_hex`.
#[derive(Serialize)]
struct RecordBody {
    seq: u64,
    direction: Option<Direction>,
    elapsed_ms: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct FileRecord {
    seq: u64,
    direction: Option<Direction>,
    elapsed_ms: u64,
    prev_sha256_hex: String,
    sha256_hex: String,
}

/// Previous-hash value of the first record in a chain.
pub const INITIAL_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

fn compute_record_sha256(body_json: &str, prev_sha256_hex: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body_json.as_bytes());
    hasher.update(prev_sha256_hex.as_bytes());
    let result = hasher.finalize();
    format!("{result:064x}")
}

/// Appends tick inputs to a JSONL file.
pub struct JournalWriter {
    writer: BufWriter<File>,
    last_sha256_hex: String,
    next_seq: u64,
}

impl JournalWriter {
    /// Creates the file (and parent directories) and writes the header line.
    pub fn create(path: &Path, seed: u64) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        let header = FileHeader { format_version: JOURNAL_FORMAT_VERSION, seed };
        let header_json = serde_json::to_string(&header).map_err(io::Error::other)?;
        writeln!(writer, "{header_json}")?;
        writer.flush()?;

        Ok(Self { writer, last_sha256_hex: INITIAL_HASH.to_string(), next_seq: 0 })
    }

    pub fn append(&mut self, direction: Option<Direction>, elapsed_ms: u64) -> io::Result<()> {
        let body = RecordBody { seq: self.next_seq, direction, elapsed_ms };
        let body_json = serde_json::to_string(&body).map_err(io::Error::other)?;
        let sha256_hex = compute_record_sha256(&body_json, &self.last_sha256_hex);

        let record = FileRecord {
            seq: self.next_seq,
            direction,
            elapsed_ms,
            prev_sha256_hex: self.last_sha256_hex.clone(),
            sha256_hex: sha256_hex.clone(),
        };
        let record_json = serde_json::to_string(&record).map_err(io::Error::other)?;
        writeln!(self.writer, "{record_json}")?;
        self.writer.flush()?;

        self.last_sha256_hex = sha256_hex;
        self.next_seq += 1;
        Ok(())
    }

    /// Writes every record of an in-memory journal.
    pub fn write_all(path: &Path, journal: &InputJournal) -> io::Result<()> {
        let mut writer = Self::create(path, journal.seed)?;
        for record in &journal.inputs {
            writer.append(record.direction, record.elapsed_ms)?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum JournalLoadError {
    #[error("journal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("journal file is empty")]
    EmptyFile,

    #[error("invalid journal header at line {line}: {message}")]
    InvalidHeader { line: usize, message: String },

    #[error("invalid journal record at line {line}: {message}")]
    InvalidRecord { line: usize, message: String },

    /// The file ended without a trailing newline.
    #[error("incomplete journal line at line {line}")]
    IncompleteLine { line: usize },

    #[error("SHA-256 hash chain broken at line {line}")]
    HashChainBroken { line: usize },
}

pub fn load_journal_from_file(path: &Path) -> Result<InputJournal, JournalLoadError> {
    let content = fs::read_to_string(path)?;
    let lines: Vec<&str> = content.lines().collect();
    if lines.is_empty() {
        return Err(JournalLoadError::EmptyFile);
    }
    if !content.ends_with('\n') {
        return Err(JournalLoadError::IncompleteLine { line: lines.len() });
    }

    let header: FileHeader = serde_json::from_str(lines[0])
        .map_err(|e| JournalLoadError::InvalidHeader { line: 1, message: e.to_string() })?;
    let mut journal = InputJournal {
        format_version: header.format_version,
        seed: header.seed,
        inputs: Vec::with_capacity(lines.len() - 1),
    };

    let mut prev_sha256_hex = INITIAL_HASH.to_string();
    for (line_index, line) in lines.iter().skip(1).enumerate() {
        let line_number = line_index + 2;
        let expected_seq = line_index as u64;

        let record: FileRecord = serde_json::from_str(line).map_err(|e| {
            JournalLoadError::InvalidRecord { line: line_number, message: e.to_string() }
        })?;
        if record.seq != expected_seq {
            return Err(JournalLoadError::InvalidRecord {
                line: line_number,
                message: format!("expected seq {expected_seq}, found {}", record.seq),
            });
        }
        if record.prev_sha256_hex != prev_sha256_hex {
            return Err(JournalLoadError::HashChainBroken { line: line_number });
        }

        let body = RecordBody {
            seq: record.seq,
            direction: record.direction,
            elapsed_ms: record.elapsed_ms,
        };
        let body_json = serde_json::to_string(&body).map_err(|e| {
            JournalLoadError::InvalidRecord { line: line_number, message: e.to_string() }
        })?;
        if record.sha256_hex != compute_record_sha256(&body_json, &prev_sha256_hex) {
            return Err(JournalLoadError::HashChainBroken { line: line_number });
        }

        journal.inputs.push(InputRecord {
            seq: record.seq,
            direction: record.direction,
            elapsed_ms: record.elapsed_ms,
        });
        prev_sha256_hex = record.sha256_hex;
    }

    Ok(journal)
}
