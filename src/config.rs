use std::path::Path;

use rand::Rng;

use crate::ai::Difficulty;
use crate::error::ConfigError;
use crate::game::{DiscColor, BOARD_SIZE, MIN_BOARD_SIZE};

/// Color choice offered at game start; `random` is resolved by coin flip
/// when the session is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Black,
    White,
    Random,
}

impl PlayerColor {
    /// Resolve to a concrete disc color.
    pub fn resolve(self, rng: &mut impl Rng) -> DiscColor {
        match self {
            PlayerColor::Black => DiscColor::Black,
            PlayerColor::White => DiscColor::White,
            PlayerColor::Random => {
                if rng.random_bool(0.5) {
                    DiscColor::Black
                } else {
                    DiscColor::White
                }
            }
        }
    }
}

/// Game setup handed over by the UI at start, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub difficulty: Difficulty,
    pub human_color: PlayerColor,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: BOARD_SIZE,
            difficulty: Difficulty::Normal,
            human_color: PlayerColor::Black,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE || self.board_size % 2 != 0 {
            return Err(ConfigError::Validation(format!(
                "board_size must be an even number of at least {MIN_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        Ok(())
    }
}
