//! Error types for Vapor

use thiserror::Error;

/// The main error type for Vapor operations
#[derive(Debug, Error)]
pub enum VaporError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for Vapor operations
pub type Result<T> = std::result::Result<T, VaporError>;

impl From<toml::de::Error> for VaporError {
    fn from(err: toml::de::Error) -> Self {
        VaporError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for VaporError {
    fn from(err: toml::ser::Error) -> Self {
        VaporError::TomlSerError(err.to_string())
    }
}
