//! Construction-time failures. Movement and pathfinding never fail; blocked moves
//! and unreachable targets are ordinary outcomes reported through `TickResult`.

use thiserror::Error;

use crate::types::Pos;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("wall at ({}, {}) lies outside the grid", .0.x, .0.y)]
    WallOutOfBounds(Pos),

    #[error("at least one bot is required")]
    NoBots,

    #[error("no empty cell is available for spawning")]
    NoEmptyCell,

    #[error("no empty cell lies at least {min_distance} steps from the player")]
    SeparationUnsatisfiable { min_distance: u32 },

    #[error("cannot place an entity at ({}, {}): cell is not empty", .0.x, .0.y)]
    InvalidPlacement(Pos),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("tick rate must be greater than zero")]
    ZeroTickRate,

    #[error(transparent)]
    Invalid(#[from] SimError),
}
