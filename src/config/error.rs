//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Journal API base URL must be an http(s) URL with a host")]
    InvalidBaseUrl,

    #[error("Unknown log format '{0}' (expected pretty or json)")]
    InvalidLogFormat(String),
}
