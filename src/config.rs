use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use anyhow::Result;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://www.wbgt.env.go.jp/mntr/dl";
const DEFAULT_LOCATION: &str = "Kyoto";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_SNAPSHOT_FILE: &str = "latest_wbgt.csv";

/// Where and how to fetch the monthly WBGT measurement file
///
#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct SourceParameters {
    pub base_url: String,
    pub location: String,
    pub timeout_secs: Option<u64>,
}

impl Default for SourceParameters {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct Files {
    pub data_dir: String,
    pub snapshot_file: String,
}

impl Default for Files {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            snapshot_file: DEFAULT_SNAPSHOT_FILE.to_string(),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_console: bool,
}

impl Default for General {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LevelFilter::Info,
            log_to_console: false,
        }
    }
}

#[derive(Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub source: SourceParameters,
    pub files: Files,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items.
/// Without a path the built-in defaults are returned.
///
/// # Arguments
///
/// * 'config_path' - optional path to the configuration file
pub fn load_config(config_path: Option<&str>) -> Result<Config, LoadConfigurationError> {
    match config_path {
        None => Ok(Config::default()),
        Some(path) => {
            let toml = fs::read_to_string(path)
                .map_err(|e| LoadConfigurationError::ReadError(format!("{}: {}", path, e)))?;

            parse_config(&toml)
        }
    }
}

/// Parses a TOML document into a configuration, missing items fall back to defaults
///
/// # Arguments
///
/// * 'toml' - the TOML document
fn parse_config(toml: &str) -> Result<Config, LoadConfigurationError> {
    let config: Config = toml::from_str(toml)
        .map_err(|e| LoadConfigurationError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Error depicting errors that occur while loading the configuration
///
#[derive(Debug, Error)]
pub enum LoadConfigurationError {
    #[error("ReadError: {0}")]
    ReadError(String),
    #[error("ParseError: {0}")]
    ParseError(String),
}
