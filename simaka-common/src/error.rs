//! Error types for simaka

use thiserror::Error;

/// Error types shared by the simaka crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Hex string could not be decoded.
    #[error("Invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    /// YAML parsing errors.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}
