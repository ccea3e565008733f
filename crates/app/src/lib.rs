pub mod app_loop;
pub mod frame_input;
pub mod seed;

use app_loop::AppMode;

pub const APP_NAME: &str = "Pursuit Square";

/// Side length of one grid cell in logical pixels.
pub const CELL_SIZE: f32 = 40.0;

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// One-line status shown over the board.
pub fn status_text(mode: &AppMode, tick: u64) -> String {
    match mode {
        AppMode::Running => format!("tick {tick}"),
        AppMode::Caught { bot } => format!("Caught by bot {bot} at tick {tick}. Esc to quit"),
        AppMode::Quit => "quitting".to_string(),
    }
}
