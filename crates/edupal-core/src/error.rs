//! Core error types for edupal-core.
//!
//! Errors are split by concern with thiserror. Provider failures
//! ([`UpdatesError`]) never escape the suggestion resolver; they are only
//! surfaced to callers that talk to a provider directly.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for edupal-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Important-updates collaborator errors
    #[error("Updates error: {0}")]
    Updates(#[from] UpdatesError),

    /// OS credential store errors
    #[error("Credential store error: {0}")]
    Keyring(#[from] keyring::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Could not determine or create the data directory
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Errors raised by an [`UpdatesProvider`](crate::updates::UpdatesProvider).
#[derive(Error, Debug)]
pub enum UpdatesError {
    /// Transport failure, including timeouts
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Updates endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not a list of updates
    #[error("Failed to decode updates: {0}")]
    Decode(String),

    /// Configured base URL cannot be used
    #[error("Invalid updates base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Local source could not be read
    #[error("Failed to read updates: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for UpdatesError {
    fn from(err: serde_json::Error) -> Self {
        UpdatesError::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
