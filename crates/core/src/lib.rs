pub mod config;
pub mod error;
pub mod grid;
pub mod journal;
pub mod journal_file;
pub mod replay;
pub mod sim;
pub mod state;
pub mod types;

pub use config::SimConfig;
pub use error::{ConfigError, SimError};
pub use grid::Grid;
pub use journal::{InputJournal, InputRecord};
pub use replay::*;
pub use sim::Simulation;
pub use state::{SimState, Snapshot};
pub use types::*;
