use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the mixing model when a precondition on its inputs is violated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyrupError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl SyrupError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SyrupError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SyrupError>;

/// Errors raised while loading or saving batch files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize batch config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid constants in batch config: {0}")]
    Constants(#[from] SyrupError),
}

/// Reject NaN and infinities; `name` is used in the message.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SyrupError::invalid(format!("{name} must be a finite number, got {value}")))
    }
}
