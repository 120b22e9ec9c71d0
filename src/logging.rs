//! Logging.
//!
//! Events go through `tracing`; [`init_logging`] installs a formatting
//! subscriber on standard error, filtered by the directives in
//! [`LOG_ENV_VAR`] (default `info`).

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

pub const LOG_ENV_VAR: &str = "MONTE_PI_LOG";

const DEFAULT_DIRECTIVES: &str = "info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter '{directives}': {source}")]
    InvalidFilter {
        directives: String,
        #[source]
        source: ParseError,
    },

    #[error("logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Validated `EnvFilter` directives, e.g. `info` or `monte_pi=debug,warn`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLevel(String);

impl LogLevel {
    pub fn parse<S: Into<String>>(directives: S) -> Result<Self, LoggingError> {
        let directives = directives.into();
        match EnvFilter::try_new(&directives) {
            Ok(_) => Ok(Self(directives)),
            Err(source) => Err(LoggingError::InvalidFilter { directives, source }),
        }
    }

    /// Reads [`LOG_ENV_VAR`]; unset or blank means `info`.
    pub fn from_env() -> Result<Self, LoggingError> {
        match std::env::var(LOG_ENV_VAR) {
            Ok(v) if !v.trim().is_empty() => Self::parse(v),
            _ => Ok(Self::default()),
        }
    }

    pub fn directives(&self) -> &str {
        &self.0
    }

    pub fn as_env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.0)
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self(DEFAULT_DIRECTIVES.to_string())
    }
}

impl TryFrom<String> for LogLevel {
    type Error = LoggingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if the filter in the environment is invalid, or if a global
/// subscriber was already set.
pub fn init_logging() -> Result<(), LoggingError> {
    let level = LogLevel::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(level.as_env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}
