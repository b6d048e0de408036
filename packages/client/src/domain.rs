//! Domain logic for client-side operations.
//!
//! Pure functions (message classification and reconnect policy) kept apart
//! from the socket handling so they are easy to test.

use campus_entry_server::infrastructure::dto::websocket::{
    ConnectedMessage, Envelope, ErrorMessage, GuestStatusUpdateMessage, MessageType,
    RegisteredMessage,
};

use crate::error::ClientError;

/// A server frame, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    Connected { connection_id: String },
    Registered { department_id: u32 },
    GuestStatusUpdate(GuestStatusUpdateMessage),
    Rejected { message: String },
    /// Anything the client does not understand (displayed as is)
    Unknown(String),
}

/// Classify one text frame received from the server.
pub fn classify_server_message(text: &str) -> ServerEvent {
    let unknown = || ServerEvent::Unknown(text.to_string());
    let Ok(envelope) = serde_json::from_str::<Envelope>(text) else {
        return unknown();
    };

    match envelope.r#type {
        MessageType::Connected => serde_json::from_str::<ConnectedMessage>(text)
            .map(|m| ServerEvent::Connected {
                connection_id: m.connection_id,
            })
            .unwrap_or_else(|_| unknown()),
        MessageType::Registered => serde_json::from_str::<RegisteredMessage>(text)
            .map(|m| ServerEvent::Registered {
                department_id: m.department_id,
            })
            .unwrap_or_else(|_| unknown()),
        MessageType::GuestStatusUpdate => serde_json::from_str::<GuestStatusUpdateMessage>(text)
            .map(ServerEvent::GuestStatusUpdate)
            .unwrap_or_else(|_| unknown()),
        MessageType::Error => serde_json::from_str::<ErrorMessage>(text)
            .map(|m| ServerEvent::Rejected { message: m.message })
            .unwrap_or_else(|_| unknown()),
        MessageType::RegisterHod => unknown(),
    }
}

/// Check if the client should exit immediately based on the error type.
///
/// A rejected registration will be rejected again on every reconnect.
pub fn should_exit_immediately(error: &ClientError) -> bool {
    matches!(error, ClientError::Rejected(_))
}

/// `max_attempts` value that keeps reconnecting until the process is stopped
pub const UNLIMITED_ATTEMPTS: u32 = 0;

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `error` - The client error that occurred
/// * `current_attempt` - The number of consecutive failed attempts so far
/// * `max_attempts` - The maximum number of reconnection attempts allowed,
///   `0` for no limit
pub fn should_attempt_reconnect(
    error: &ClientError,
    current_attempt: u32,
    max_attempts: u32,
) -> bool {
    if should_exit_immediately(error) {
        return false;
    }
    max_attempts == UNLIMITED_ATTEMPTS || current_attempt < max_attempts
}
