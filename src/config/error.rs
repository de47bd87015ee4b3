//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("At least one camera device type is required")]
    NoDeviceTypes,

    #[error("Camera device type listed twice: {0}")]
    DuplicateDeviceType(String),

    #[error("Log filter must not be empty")]
    EmptyLogFilter,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),

    #[error("Host view bounds must be positive")]
    InvalidHostBounds,

    #[error("Prompt delay exceeds maximum allowed (60000 ms)")]
    PromptDelayTooLong,
}
