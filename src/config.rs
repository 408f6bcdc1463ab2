//! Game configuration
//!
//! Loaded from a TOML file; every field has a default so a partial file (or
//! no file at all) is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::gameplay::{MAX_MINE_DISTANCE, MINING_SPEED};
use crate::constants::persistence_constants::DEFAULT_SAVE_PATH;
use crate::constants::spawning::*;
use crate::entity::EntityKind;
use crate::generation::GeneratorConfig;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// World and save settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    /// Generation seed; random when absent
    pub seed: Option<u64>,
    pub save_path: PathBuf,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            seed: None,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }
}

/// Day/night settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSettings {
    pub day_length_ticks: u64,
}

impl Default for TimeSettings {
    fn default() -> Self {
        Self {
            day_length_ticks: DAY_LENGTH_TICKS,
        }
    }
}

/// Spawn scheduler settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    pub interval_ticks: u64,
    /// Per-species cap is rolled in `[min_cap, max_cap]` once per session
    pub min_cap: u32,
    pub max_cap: u32,
    /// Species that spawn at night
    pub hostile_roster: Vec<EntityKind>,
    /// Species that spawn during the day
    pub passive_roster: Vec<EntityKind>,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            interval_ticks: SPAWN_INTERVAL_TICKS,
            min_cap: MIN_SPECIES_CAP,
            max_cap: MAX_SPECIES_CAP,
            hostile_roster: vec![EntityKind::Zombie, EntityKind::Spider, EntityKind::Creeper],
            passive_roster: vec![EntityKind::Pig, EntityKind::Sheep],
        }
    }
}

/// Player tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Mining progress per tick
    pub mining_speed: f32,
    pub max_mine_distance: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            mining_speed: MINING_SPEED,
            max_mine_distance: MAX_MINE_DISTANCE,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldSettings,
    pub time: TimeSettings,
    pub spawning: SpawnSettings,
    pub player: PlayerSettings,
}

impl GameConfig {
    /// Parse and validate a TOML string
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&raw)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time.day_length_ticks < 2 {
            return Err(ConfigError::Invalid(
                "time.day_length_ticks must be at least 2".to_string(),
            ));
        }

        let spawning = &self.spawning;
        if spawning.interval_ticks == 0 {
            return Err(ConfigError::Invalid(
                "spawning.interval_ticks must be positive".to_string(),
            ));
        }
        if spawning.min_cap > spawning.max_cap {
            return Err(ConfigError::Invalid(format!(
                "spawning.min_cap ({}) exceeds spawning.max_cap ({})",
                spawning.min_cap, spawning.max_cap
            )));
        }
        if let Some(kind) = spawning.hostile_roster.iter().find(|k| !k.is_hostile()) {
            return Err(ConfigError::Invalid(format!("{} is not a hostile mob", kind)));
        }
        if let Some(kind) = spawning.passive_roster.iter().find(|k| k.is_hostile()) {
            return Err(ConfigError::Invalid(format!("{} is not a passive mob", kind)));
        }

        if !self.player.mining_speed.is_finite() || self.player.mining_speed <= 0.0 {
            return Err(ConfigError::Invalid(
                "player.mining_speed must be positive".to_string(),
            ));
        }
        if !self.player.max_mine_distance.is_finite() || self.player.max_mine_distance <= 0.0 {
            return Err(ConfigError::Invalid(
                "player.max_mine_distance must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Generator settings for this config's seed
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            seed: self.world.seed,
            ..GeneratorConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.time.day_length_ticks, DAY_LENGTH_TICKS);
        assert_eq!(config.spawning.hostile_roster.len(), 3);
    }

    #[test]
    fn test_partial_toml() {
        let config = GameConfig::from_toml_str(
            r#"
            [world]
            seed = 42

            [spawning]
            passive_roster = ["pig"]
            "#,
        )
        .unwrap();

        assert_eq!(config.world.seed, Some(42));
        assert_eq!(config.spawning.passive_roster, vec![EntityKind::Pig]);
        assert_eq!(config.spawning.interval_ticks, SPAWN_INTERVAL_TICKS);
        assert_eq!(config.generator_config().seed, Some(42));
    }

    #[test]
    fn test_rejects_misplaced_species() {
        let err = GameConfig::from_toml_str(
            r#"
            [spawning]
            hostile_roster = ["zombie", "sheep"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_inverted_caps() {
        let mut config = GameConfig::default();
        config.spawning.min_cap = 5;
        config.spawning.max_cap = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_toml_str("[time]\nday_length_ticks = \"long\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fatalcraft.toml");
        std::fs::write(&path, "[time]\nday_length_ticks = 600\n").unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.time.day_length_ticks, 600);
    }
}
