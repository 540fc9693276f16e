use log::info;
use anyhow::Result;
use thiserror::Error;
use crate::config::{load_config, Config, LoadConfigurationError};
use crate::logging::{setup_logger, LoggerError};
use crate::manager_wbgt::Wbgt;
use crate::manager_wbgt::errors::WbgtError;

pub struct Mgr {
    pub wbgt: Wbgt,
}

/// Initializes and returns configuration and a Mgr struct holding the initialized managers
///
/// # Arguments
///
/// * 'args' - program arguments
pub fn init(args: &[String]) -> Result<(Config, Mgr), InitializationError> {
    let config_path = config_path(args);

    // Load configuration, built-in defaults unless a file is given
    let config = load_config(config_path)?;

    // Setup logging
    let _ = setup_logger(config.general.log_path.as_deref(), config.general.log_level, config.general.log_to_console)?;

    // Print version
    info!("starting wbgt updater version: {}", env!("CARGO_PKG_VERSION"));

    let wbgt = Wbgt::new(&config.source)?;

    let mgr = Mgr {
        wbgt,
    };

    Ok((config, mgr))
}

/// Returns the value of a '--config=' argument if present
///
/// # Arguments
///
/// * 'args' - program arguments
fn config_path(args: &[String]) -> Option<&str> {
    args.iter()
        .find(|p| p.starts_with("--config="))
        .and_then(|p| p.split_once('='))
        .map(|(_, path)| path)
}

/// Error depicting errors that occur while initializing the updater
///
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("ConfigurationError: {0}")]
    ConfigurationError(#[from] LoadConfigurationError),
    #[error("SetupLoggerError: {0}")]
    SetupLoggerError(#[from] LoggerError),
    #[error("WbgtSetupError: {0}")]
    WbgtSetupError(#[from] WbgtError),
}
