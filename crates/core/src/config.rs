//! Run configuration: grid size, wall layout, bot count and pacing.
//! Loaded from TOML by the binaries; `Default` is the classic 10x10 tag board.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SimError};
use crate::types::Pos;

pub const DEFAULT_BOT_MOVE_INTERVAL_MS: u64 = 250;
pub const DEFAULT_TICK_RATE_HZ: u32 = 10;
pub const DEFAULT_MIN_SPAWN_DISTANCE: u32 = 5;

/// Wall cells of the classic board as `(row, column)` pairs.
const CLASSIC_WALLS: [(i32, i32); 23] = [
    (0, 7),
    (1, 1),
    (1, 2),
    (1, 6),
    (1, 9),
    (2, 2),
    (2, 5),
    (3, 0),
    (3, 7),
    (4, 2),
    (4, 3),
    (4, 4),
    (4, 7),
    (4, 9),
    (5, 1),
    (5, 2),
    (5, 4),
    (6, 4),
    (6, 8),
    (7, 4),
    (7, 8),
    (8, 1),
    (8, 8),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub bot_count: usize,
    pub bot_move_interval_ms: u64,
    pub tick_rate_hz: u32,
    pub min_spawn_distance: u32,
    pub walls: Vec<Pos>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            bot_count: 2,
            bot_move_interval_ms: DEFAULT_BOT_MOVE_INTERVAL_MS,
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            min_spawn_distance: DEFAULT_MIN_SPAWN_DISTANCE,
            walls: CLASSIC_WALLS.iter().map(|&(row, col)| Pos { x: col, y: row }).collect(),
        }
    }
}

impl SimConfig {
    /// An open board with no walls, mostly useful for tests and benchmarks.
    pub fn open(width: usize, height: usize, bot_count: usize) -> Self {
        Self { width, height, bot_count, walls: Vec::new(), ..Self::default() }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_layout()?;
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    /// Checks the cheap structural rules of the board. Spawn feasibility is only
    /// known once a simulation actually tries to place entities.
    pub fn validate_layout(&self) -> Result<(), SimError> {
        if self.width == 0 || self.height == 0 {
            return Err(SimError::InvalidDimensions { width: self.width, height: self.height });
        }
        if self.bot_count == 0 {
            return Err(SimError::NoBots);
        }
        if let Some(wall) = self.walls.iter().find(|wall| !self.contains(**wall)) {
            return Err(SimError::WallOutOfBounds(*wall));
        }
        Ok(())
    }

    /// Milliseconds between player ticks at the configured tick rate.
    pub fn tick_interval_ms(&self) -> u64 {
        1000 / u64::from(self.tick_rate_hz.max(1))
    }

    fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_classic_board() {
        let config = SimConfig::default();
        assert_eq!((config.width, config.height), (10, 10));
        assert_eq!(config.bot_count, 2);
        assert_eq!(config.walls.len(), 23);
        assert!(config.walls.contains(&Pos { x: 7, y: 0 }), "row 0 column 7 is a wall");
        assert!(config.walls.contains(&Pos { x: 0, y: 3 }), "row 3 column 0 is a wall");
        assert_eq!(config.tick_interval_ms(), 100);
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config = SimConfig::from_toml_str(
            r#"
            width = 16
            height = 12
            bot_count = 3
            walls = [{ x = 1, y = 1 }, { x = 2, y = 1 }]
            "#,
        )
        .expect("partial config should parse");
        assert_eq!(config.width, 16);
        assert_eq!(config.bot_count, 3);
        assert_eq!(config.walls, vec![Pos { x: 1, y: 1 }, Pos { x: 2, y: 1 }]);
        assert_eq!(config.bot_move_interval_ms, DEFAULT_BOT_MOVE_INTERVAL_MS);
        assert_eq!(config.min_spawn_distance, DEFAULT_MIN_SPAWN_DISTANCE);
    }

    #[test]
    fn toml_roundtrip_preserves_layout() {
        let config = SimConfig::default();
        let raw = toml::to_string(&config).expect("config should serialize");
        let decoded = SimConfig::from_toml_str(&raw).expect("serialized config should parse");
        assert_eq!(config, decoded);
    }

    #[test]
    fn rejects_wall_outside_grid() {
        let err = SimConfig::from_toml_str("width = 4\nheight = 4\nwalls = [{ x = 4, y = 0 }]")
            .expect_err("out-of-range wall should be rejected");
        assert!(matches!(err, ConfigError::Invalid(SimError::WallOutOfBounds(Pos { x: 4, y: 0 }))));
    }

    #[test]
    fn rejects_zero_sized_grid_and_missing_bots() {
        let zero = SimConfig { width: 0, ..SimConfig::default() };
        assert!(matches!(
            zero.validate(),
            Err(ConfigError::Invalid(SimError::InvalidDimensions { .. }))
        ));
        let botless = SimConfig { bot_count: 0, ..SimConfig::default() };
        assert!(matches!(botless.validate(), Err(ConfigError::Invalid(SimError::NoBots))));
    }

    #[test]
    fn malformed_toml_reports_parse_error() {
        let err = SimConfig::from_toml_str("width = \"wide\"").expect_err("should not parse");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
