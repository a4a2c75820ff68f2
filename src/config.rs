// Configuration loading and parsing (config/crease.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// crease.toml structs
// ---------------------------------------------------------------------------

/// Top-level deserialization target for crease.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(rename = "match")]
    pub match_settings: MatchConfig,
    pub rotation: RotationConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    pub data: DataPaths,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchConfig {
    /// Minimum confirmed players needed before teams are formed.
    pub min_players: usize,
    #[serde(default = "default_red_name")]
    pub red_name: String,
    #[serde(default = "default_blue_name")]
    pub blue_name: String,
}

fn default_red_name() -> String {
    "Red".to_string()
}

fn default_blue_name() -> String {
    "Blue".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RotationConfig {
    /// Captain look-back window: the most recent N matches.
    pub window: usize,
}

/// Optional engine tuning. A fixed seed makes the single-keeper coin flip
/// reproducible.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EngineConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub players: String,
    pub captains: String,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/crease.toml` relative to `base_dir`.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("crease.toml");
    let text = std::fs::read_to_string(&path)
        .map_err(|_| ConfigError::FileNotFound { path: path.clone() })?;
    let config: Config =
        toml::from_str(&text).map_err(|e| ConfigError::ParseError { path, source: e })?;

    validate(&config)?;
    Ok(config)
}

/// Load configuration from the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    load_config_from(&cwd)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.match_settings.min_players < 2 {
        return Err(ConfigError::ValidationError {
            field: "match.min_players".to_string(),
            message: "a match needs at least 2 players".to_string(),
        });
    }
    if config.rotation.window == 0 {
        return Err(ConfigError::ValidationError {
            field: "rotation.window".to_string(),
            message: "rotation window must be at least 1 match".to_string(),
        });
    }
    if config.match_settings.red_name.trim().is_empty()
        || config.match_settings.blue_name.trim().is_empty()
    {
        return Err(ConfigError::ValidationError {
            field: "match.red_name/blue_name".to_string(),
            message: "team display names must not be empty".to_string(),
        });
    }
    Ok(())
}
