//! Error types for gnat

use thiserror::Error;

/// The main error type for gnat operations
#[derive(Debug, Error)]
pub enum GnatError {
    #[error("Swarm is full: {capacity} flies alive")]
    SwarmFull { capacity: usize },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("Cadence mismatch: {0}")]
    CadenceMismatch(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

/// Result type alias for gnat operations
pub type Result<T> = std::result::Result<T, GnatError>;

impl From<toml::de::Error> for GnatError {
    fn from(err: toml::de::Error) -> Self {
        GnatError::TomlParseError(err.to_string())
    }
}
