//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use campus_entry_server::infrastructure::dto::websocket::{
    MessageType, RawDepartmentId, RegisterHodMessage,
};

use crate::{
    domain::{ServerEvent, classify_server_message},
    error::ClientError,
    formatter::MessageFormatter,
};

/// Run one WebSocket session
///
/// Returns `Ok(())` when the user presses Ctrl+C. Every other way out is an
/// error the runner may reconnect from.
pub async fn run_client_session(url: &str, department_id: u32) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;
    tracing::info!("Connected to {}", url);

    let (mut write, mut read) = ws_stream.split();
    let mut registered = false;

    loop {
        let message = tokio::select! {
            message = read.next() => message,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                write.send(Message::Close(None)).await.ok();
                return Ok(());
            }
        };

        let text = match message {
            Some(Ok(Message::Text(text))) => text,
            Some(Ok(Message::Close(_))) | None => {
                return Err(lost(registered, "server closed the connection"));
            }
            Some(Err(e)) => return Err(lost(registered, &e.to_string())),
            Some(Ok(_)) => continue,
        };

        match classify_server_message(&text) {
            ServerEvent::Connected { connection_id } => {
                tracing::info!("Assigned connection id '{}'", connection_id);
                // 再接続のたびに登録し直す
                let register = RegisterHodMessage {
                    r#type: MessageType::RegisterHod,
                    department_id: RawDepartmentId::Number(i64::from(department_id)),
                };
                let json = serde_json::to_string(&register)
                    .map_err(|e| ClientError::ConnectionError(e.to_string()))?;
                write
                    .send(Message::Text(json.into()))
                    .await
                    .map_err(|e| ClientError::ConnectionError(e.to_string()))?;
            }
            ServerEvent::Registered { department_id } => {
                registered = true;
                print!("{}", MessageFormatter::format_registered(department_id));
            }
            ServerEvent::GuestStatusUpdate(update) => {
                print!("{}", MessageFormatter::format_guest_status_update(&update));
            }
            ServerEvent::Rejected { message } => {
                return Err(ClientError::Rejected(message));
            }
            ServerEvent::Unknown(text) => {
                print!("{}", MessageFormatter::format_raw_message(&text));
            }
        }
    }
}

fn lost(registered: bool, reason: &str) -> ClientError {
    if registered {
        ClientError::ConnectionLost(reason.to_string())
    } else {
        ClientError::ConnectionError(reason.to_string())
    }
}
