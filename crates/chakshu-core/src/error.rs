//! Error types for the Chakshu.AI landing page

use thiserror::Error;

/// Main error type for landing page operations
#[derive(Error, Debug)]
pub enum LandingError {
    /// Reading the configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON for `LandingConfig`
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using LandingError
pub type LandingResult<T> = Result<T, LandingError>;
