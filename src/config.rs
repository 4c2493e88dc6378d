use std::path::Path;

use crate::error::ConfigError;
use crate::game::Layout;

/// Board dimensions and reward scalars, loadable from TOML.
///
/// A config is immutable once a game is created from it and is `Copy`, so
/// every cloned [`GameState`](crate::game::GameState) carries its own.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_height: usize,
    pub board_width: usize,
    pub win_length: usize,
    pub reward_win: f32,
    pub reward_draw: f32,
    pub reward_lose: f32,
    pub reward_step: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_height: 6,
            board_width: 7,
            win_length: 4,
            reward_win: 1.0,
            reward_draw: 0.0,
            reward_lose: -1.0,
            reward_step: 0.0,
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_height == 0 {
            return Err(ConfigError::Validation(
                "board_height must be >= 1".into(),
            ));
        }
        if self.board_width == 0 {
            return Err(ConfigError::Validation(
                "board_width must be >= 1".into(),
            ));
        }
        let padded_bits = self
            .board_height
            .checked_add(1)
            .and_then(|stride| self.board_width.checked_mul(stride));
        if padded_bits.map_or(true, |bits| bits > Layout::MAX_BITS) {
            return Err(ConfigError::Validation(format!(
                "board_width * (board_height + 1) must be <= {}",
                Layout::MAX_BITS
            )));
        }
        if self.win_length == 0 {
            return Err(ConfigError::Validation(
                "win_length must be >= 1".into(),
            ));
        }

        let rewards = [
            ("reward_win", self.reward_win),
            ("reward_draw", self.reward_draw),
            ("reward_lose", self.reward_lose),
            ("reward_step", self.reward_step),
        ];
        for (name, value) in rewards {
            if !value.is_finite() {
                return Err(ConfigError::Validation(format!("{name} must be finite")));
            }
        }

        Ok(())
    }

    /// Geometry of the padded bit layout for this board.
    pub fn layout(&self) -> Layout {
        Layout::new(self.board_height, self.board_width)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board_height, 6);
        assert_eq!(config.board_width, 7);
        assert_eq!(config.win_length, 4);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
board_width = 9
reward_step = -0.01
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board_width, 9);
        assert!((config.reward_step + 0.01).abs() < 1e-6);
        assert_eq!(config.board_height, 6);
        assert!((config.reward_win - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_height() {
        let config = GameConfig {
            board_height: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_width() {
        let config = GameConfig {
            board_width: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        // 12 columns of 11 padded bits = 132 > 128
        let config = GameConfig {
            board_height: 10,
            board_width: 12,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            board_height: 15,
            board_width: 8,
            ..GameConfig::default()
        };
        config.validate().expect("8 columns of 16 bits fit exactly");
    }

    #[test]
    fn test_validation_rejects_overflowing_dimensions() {
        let config = GameConfig {
            board_height: usize::MAX,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
        assert!(crate::game::GameState::new(config).is_err());

        let config = GameConfig {
            board_width: usize::MAX,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.toml");
        std::fs::write(
            &path,
            "board_height = 9223372036854775807\nboard_width = 2\n",
        )
        .unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validation_rejects_zero_win_length() {
        let config = GameConfig {
            win_length: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_finite_reward() {
        let config = GameConfig {
            reward_draw: f32::NAN,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            reward_win: f32::INFINITY,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("nonexistent_game.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
board_height = 5
win_length = 3
reward_lose = -2.0
"#
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.board_height, 5);
        assert_eq!(config.win_length, 3);
        assert!((config.reward_lose + 2.0).abs() < 1e-6);
        assert_eq!(config.board_width, 7);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "win_length = 0\n").unwrap();

        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "board_height = \"six\"\n").unwrap();

        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = GameConfig::default_toml();
        let config: GameConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, GameConfig::default());
    }
}
