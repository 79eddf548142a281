//! Session configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{check_dimension, DEFAULT_DIMENSION};
use crate::error::ConfigError;

/// Rounds in a standard match
pub const DEFAULT_ROUNDS: usize = 12;

/// Settings for a console match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board is dimension × dimension
    pub dimension: usize,
    /// Number of rounds in the match
    pub rounds: usize,
    /// List legal moves before each turn
    pub show_valid_moves: bool,
    /// Let the matchbox AI answer for Player Two (it defers to the console)
    pub ai_opponent: bool,
    /// Wait for Enter between rounds
    pub pause_between_rounds: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            rounds: DEFAULT_ROUNDS,
            show_valid_moves: true,
            ai_opponent: false,
            pause_between_rounds: true,
        }
    }
}

impl GameConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension(self.dimension)?;
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        Ok(())
    }

    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.dimension, 4);
        assert_eq!(config.rounds, 12);
        assert!(config.show_valid_moves);
        assert!(!config.ai_opponent);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"dimension": 3, "ai_opponent": true}"#).unwrap();
        assert_eq!(config.dimension, 3);
        assert!(config.ai_opponent);
        assert_eq!(config.rounds, DEFAULT_ROUNDS);
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            GameConfig::default().with_dimension(8).validate(),
            Err(ConfigError::InvalidDimension { dimension: 8, .. })
        ));
        assert!(matches!(
            GameConfig::default().with_rounds(0).validate(),
            Err(ConfigError::NoRounds)
        ));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("hexapawn-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"dimension": 5, "rounds": 2, "pause_between_rounds": false}"#).unwrap();

        let config = GameConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.dimension, 5);
        assert_eq!(config.rounds, 2);
        assert!(!config.pause_between_rounds);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load(Path::new("/nonexistent/hexapawn.json")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
