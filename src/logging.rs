use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::{Config, Handle};
use thiserror::Error;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Sets up the global logger
///
/// # Arguments
///
/// * 'log_path' - optional path to a log file to append to
/// * 'log_level' - max level to log
/// * 'log_to_console' - whether to also log to stderr, stdout is kept for the status line
pub fn setup_logger(log_path: Option<&str>, log_level: LevelFilter, log_to_console: bool) -> Result<Handle, LoggerError> {
    let config = logger_config(log_path, log_level, log_to_console)?;

    let handle = log4rs::init_config(config)
        .map_err(|e| LoggerError::InitError(e.to_string()))?;

    Ok(handle)
}

/// Builds the log4rs configuration, with no appenders nothing gets logged
///
/// # Arguments
///
/// * 'log_path' - optional path to a log file to append to
/// * 'log_level' - max level to log
/// * 'log_to_console' - whether to also log to stderr
fn logger_config(log_path: Option<&str>, log_level: LevelFilter, log_to_console: bool) -> Result<Config, LoggerError> {
    let mut builder = Config::builder();
    let mut root = Root::builder();

    if let Some(path) = log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(path)
            .map_err(|e| LoggerError::FileAppenderError(format!("{}: {}", path, e)))?;

        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    if log_to_console {
        let console = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();

        builder = builder.appender(Appender::builder().build("console", Box::new(console)));
        root = root.appender("console");
    }

    builder
        .build(root.build(log_level))
        .map_err(|e| LoggerError::ConfigError(e.to_string()))
}

/// Error depicting errors that occur while setting up the logger
///
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("FileAppenderError: {0}")]
    FileAppenderError(String),
    #[error("ConfigError: {0}")]
    ConfigError(String),
    #[error("InitError: {0}")]
    InitError(String),
}
