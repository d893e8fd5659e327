use std::path::Path;

use crate::ai::{Agent, MinimaxAgent, RandomAgent};
use crate::error::ConfigError;
use crate::game::{Piece, SessionConfig};

/// Deepest search the front end accepts.
pub const MAX_DEPTH: u32 = 10;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub player: PlayerConfig,
    pub engine: EngineConfig,
}

/// Human player settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: String,
    /// When false the computer opens the game.
    pub moves_first: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            name: "Player".to_string(),
            moves_first: true,
        }
    }
}

/// Which kind of computer opponent to play against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    Minimax,
    Random,
}

/// Computer opponent settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies; the difficulty knob.
    pub depth: u32,
    pub opponent: OpponentKind,
    /// Seed for the random opponent; entropy from the OS when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: 2,
            opponent: OpponentKind::Minimax,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Build the computer opponent playing `piece`.
    pub fn build_agent(&self, piece: Piece) -> Box<dyn Agent> {
        match self.opponent {
            OpponentKind::Minimax => Box::new(MinimaxAgent::new(piece, self.depth)),
            OpponentKind::Random => match self.seed {
                Some(seed) => Box::new(RandomAgent::seeded(seed)),
                None => Box::new(RandomAgent::new()),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player.name must not be empty".into(),
            ));
        }
        if self.engine.depth == 0 {
            return Err(ConfigError::Validation(
                "engine.depth must be >= 1".into(),
            ));
        }
        if self.engine.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "engine.depth must be <= {MAX_DEPTH}"
            )));
        }

        Ok(())
    }

    /// Session settings for the front end.
    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            player_name: self.player.name.clone(),
            human_moves_first: self.player.moves_first,
        }
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Board;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.engine.depth, 2);
        assert_eq!(config.engine.opponent, OpponentKind::Minimax);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[engine]
depth = 4
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.engine.depth, 4);
        // Other fields should be defaults
        assert_eq!(config.player.name, "Player");
        assert!(config.player.moves_first);
        assert_eq!(config.engine.seed, None);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.engine.depth, default.engine.depth);
        assert_eq!(config.player.name, default.player.name);
    }

    #[test]
    fn test_opponent_parses_lowercase() {
        let toml_str = r#"
[engine]
opponent = "random"
seed = 5
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.engine.opponent, OpponentKind::Random);
        assert_eq!(config.engine.seed, Some(5));
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.engine.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_excessive_depth() {
        let mut config = AppConfig::default();
        config.engine.depth = MAX_DEPTH + 1;
        assert!(config.validate().is_err());
        config.engine.depth = MAX_DEPTH;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let mut config = AppConfig::default();
        config.player.name = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.engine.depth, 2);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[player]
name = "Ada"
moves_first = false
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.player.name, "Ada");
        let session = config.session();
        assert_eq!(session.player_name, "Ada");
        assert!(!session.human_moves_first);
        // Others are defaults
        assert_eq!(config.engine.depth, 2);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[engine]\ndepth = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[engine\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }

    #[test]
    fn test_build_agent() {
        let board = Board::new();
        let mut engine = EngineConfig::default();
        let mut agent = engine.build_agent(Piece::Red);
        assert_eq!(agent.name(), "Minimax");
        assert!(board.is_valid_column(agent.select_column(&board)));

        engine.opponent = OpponentKind::Random;
        engine.seed = Some(1);
        let agent = engine.build_agent(Piece::Red);
        assert_eq!(agent.name(), "Random");
    }
}
