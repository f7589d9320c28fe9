//! Error types for ensayo-lab

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[allow(dead_code)]
    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Store-related errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record {0} not found in store")]
    NotFound(u64),

    #[error("Store data corrupted: {0}")]
    Corrupted(String),

    #[error("Store IO error: {0}")]
    IoError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
