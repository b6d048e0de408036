//! Error types for the department-head client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Could not open the WebSocket connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The connection dropped after the department was registered
    #[error("Connection lost: {0}")]
    ConnectionLost(String),

    /// The server answered `register-hod` with an error
    #[error("Registration rejected: {0}")]
    Rejected(String),
}
