use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chord::{parse_chord, Chord, DEFAULT_CHORD};

pub const DATA_DIR_ENV: &str = "QUICKPICK_DATA_DIR";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub chord: String,
    pub max_results: u16,
    pub catalog_dir: Option<PathBuf>,
    pub history_db_path: PathBuf,
    pub config_path: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    chord: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    catalog_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    history_db_path: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "config io error: {error}"),
            Self::Parse(error) => write!(f, "config parse error: {error}"),
            Self::Invalid(error) => write!(f, "invalid config: {error}"),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn stable_app_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    std::env::temp_dir().join("quickpick")
}

impl Default for Config {
    fn default() -> Self {
        let base = stable_app_data_dir();
        Self {
            chord: DEFAULT_CHORD.to_string(),
            max_results: 20,
            catalog_dir: None,
            history_db_path: base.join("history.sqlite3"),
            config_path: base.join(CONFIG_FILE_NAME),
        }
    }
}

pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = Config::default();
    if let Some(path) = path {
        config.config_path = path.to_path_buf();
    }

    if !config.config_path.exists() {
        validate(&config).map_err(ConfigError::Invalid)?;
        return Ok(config);
    }

    let raw = fs::read_to_string(&config.config_path).map_err(|error| {
        ConfigError::Io(format!(
            "failed to read {}: {error}",
            config.config_path.display()
        ))
    })?;
    let file: ConfigFile =
        toml::from_str(&raw).map_err(|error| ConfigError::Parse(error.to_string()))?;

    if let Some(chord) = file.chord {
        config.chord = chord;
    }
    if let Some(max_results) = file.max_results {
        config.max_results = max_results;
    }
    if file.catalog_dir.is_some() {
        config.catalog_dir = file.catalog_dir;
    }
    if let Some(history_db_path) = file.history_db_path {
        config.history_db_path = history_db_path;
    }

    validate(&config).map_err(ConfigError::Invalid)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<(), ConfigError> {
    validate(config).map_err(ConfigError::Invalid)?;

    let file = ConfigFile {
        chord: Some(config.chord.clone()),
        max_results: Some(config.max_results),
        catalog_dir: config.catalog_dir.clone(),
        history_db_path: Some(config.history_db_path.clone()),
    };
    let rendered =
        toml::to_string_pretty(&file).map_err(|error| ConfigError::Parse(error.to_string()))?;

    if let Some(parent) = config.config_path.parent() {
        fs::create_dir_all(parent).map_err(|error| ConfigError::Io(error.to_string()))?;
    }
    fs::write(&config.config_path, rendered).map_err(|error| ConfigError::Io(error.to_string()))
}

pub fn validate(config: &Config) -> Result<(), String> {
    parse_chord(&config.chord).map_err(|error| error.to_string())?;

    if config.max_results < 5 || config.max_results > 100 {
        return Err("max_results out of range (5..=100)".into());
    }

    if config.history_db_path.as_os_str().is_empty() {
        return Err("history_db_path is required".into());
    }

    if config.config_path.as_os_str().is_empty() {
        return Err("config_path is required".into());
    }

    Ok(())
}

pub fn chord(config: &Config) -> Result<Chord, String> {
    parse_chord(&config.chord).map_err(|error| error.to_string())
}
