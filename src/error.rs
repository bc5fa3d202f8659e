//! Error types for varnishadm
//!
//! Provides a unified error type for all client operations.

use thiserror::Error;

/// Result type alias using AdminError
pub type Result<T> = std::result::Result<T, AdminError>;

/// Unified error type for admin client operations
#[derive(Debug, Error)]
pub enum AdminError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("Connection error: {0}")]
    Connection(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Error code {code} returned from server, message is '{message}'")]
    Command { code: u64, message: String },

    // -------------------------------------------------------------------------
    // Body Parsing Errors
    // -------------------------------------------------------------------------
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Parameter not found: {0}")]
    NotFound(String),

    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdminError {
    /// Whether this error leaves the connection unusable.
    ///
    /// Connection and protocol failures drop the socket; a caller that wants
    /// to retry should do so only for these.
    pub fn is_connection_fatal(&self) -> bool {
        matches!(self, AdminError::Connection(_) | AdminError::Protocol(_))
    }

    /// Status code carried by a command error, if any
    pub fn status_code(&self) -> Option<u64> {
        match self {
            AdminError::Command { code, .. } => Some(*code),
            _ => None,
        }
    }
}
