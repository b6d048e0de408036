//! WebSocket connection handlers.
//!
//! 接続ごとに送信チャンネルを作り、外向きのメッセージ（`connected` / `registered` /
//! `error` / `guest-status-update`）は全てこのチャンネル経由で送る。

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use serde::Serialize;
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, DepartmentId},
    infrastructure::dto::websocket::{
        ConnectedMessage, Envelope, ErrorMessage, MessageType, RegisterHodMessage,
        RegisteredMessage,
    },
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    let (tx, rx) = mpsc::unbounded_channel();
    let connection_id = state.open_connection_usecase.execute(tx).await;
    tracing::info!("Connection '{}' opened", connection_id);

    let connected = ConnectedMessage {
        r#type: MessageType::Connected,
        connection_id: connection_id.as_str().to_string(),
    };
    reply(&state, &connection_id, &connected).await;

    let state_clone = state.clone();
    let connection_id_clone = connection_id.clone();

    // Spawn a task to receive messages from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id_clone, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received text from '{}': {}", connection_id_clone, text);
                    handle_client_message(&state_clone, &connection_id_clone, &text).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id_clone);
                    break;
                }
                _ => {}
            }
        }
    });

    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    let departments = state.close_connection_usecase.execute(&connection_id).await;
    tracing::info!(
        "Connection '{}' closed ({} department registration(s) removed)",
        connection_id,
        departments.len()
    );
}

/// Dispatch one inbound text frame.
async fn handle_client_message(state: &AppState, connection_id: &ConnectionId, text: &str) {
    match parse_register_hod(text) {
        Ok(department_id) => {
            state
                .register_department_head_usecase
                .execute(department_id, connection_id.clone())
                .await;
            let registered = RegisteredMessage {
                r#type: MessageType::Registered,
                department_id: department_id.value(),
            };
            reply(state, connection_id, &registered).await;
        }
        Err(message) => {
            tracing::warn!("Rejected message from '{}': {}", connection_id, message);
            let error = ErrorMessage {
                r#type: MessageType::Error,
                message,
            };
            reply(state, connection_id, &error).await;
        }
    }
}

const INVALID_DEPARTMENT_ID: &str = "Invalid department id";

/// `register-hod` メッセージから学科 ID を取り出す
///
/// それ以外のメッセージ、または不正な学科 ID はエラーメッセージを返す。
fn parse_register_hod(text: &str) -> Result<DepartmentId, String> {
    let envelope: Envelope =
        serde_json::from_str(text).map_err(|e| format!("Malformed message: {}", e))?;
    if envelope.r#type != MessageType::RegisterHod {
        return Err(format!("Unsupported message type: {:?}", envelope.r#type));
    }

    let register: RegisterHodMessage =
        serde_json::from_str(text).map_err(|e| format!("Malformed register-hod: {}", e))?;
    DepartmentId::try_from(register.department_id).map_err(|e| {
        tracing::debug!("Rejected register-hod department id: {}", e);
        INVALID_DEPARTMENT_ID.to_string()
    })
}

async fn reply<T: Serialize>(state: &AppState, connection_id: &ConnectionId, message: &T) {
    let json = match serde_json::to_string(message) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to encode message for '{}': {}", connection_id, e);
            return;
        }
    };
    if let Err(e) = state.open_connection_usecase.reply(connection_id, &json).await {
        tracing::warn!("Failed to reply to '{}': {}", connection_id, e);
    }
}
