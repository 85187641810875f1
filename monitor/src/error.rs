//! Error types for the monitoring tool.

use thiserror::Error;

/// Result type for monitor operations.
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Errors that can occur while polling metrics or dispatching alerts.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Transport-level HTTP failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success status.
    #[error("gateway error: {0}")]
    Api(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration file problems.
    #[error("config error: {0}")]
    Config(String),
}
