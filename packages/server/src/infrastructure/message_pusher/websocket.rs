//! WebSocket を使った NotificationPusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` を管理
//! - 接続へのテキスト送信と、ステータス変更通知の JSON 化
//!
//! ## 設計ノート
//!
//! WebSocket の受付は UI 層（`ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、送信に使用します。
//! 送信はキューに積むだけなので、遅い接続が呼び出し側を待たせることはない。

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::FixedOffset;
use tokio::sync::Mutex;

use crate::{
    domain::{ConnectionId, GuestStatusNotification, NotificationPusher, PushError, PusherChannel},
    infrastructure::dto::websocket::GuestStatusUpdateMessage,
};

/// WebSocket を使った NotificationPusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let pusher = WebSocketNotificationPusher::new(utc_offset);
/// pusher.register_connection(connection_id.clone(), tx).await;
/// pusher.push_guest_status(&connection_id, &notification).await?;
/// ```
pub struct WebSocketNotificationPusher {
    /// Key: 接続 ID, Value: その接続の送信チャンネル
    connections: Mutex<HashMap<ConnectionId, PusherChannel>>,
    /// 通知の日付を描画するオフセット
    utc_offset: FixedOffset,
}

impl WebSocketNotificationPusher {
    pub fn new(utc_offset: FixedOffset) -> Self {
        Self {
            connections: Mutex::new(HashMap::new()),
            utc_offset,
        }
    }

    /// 登録中の接続数
    pub async fn connection_count(&self) -> usize {
        self.connections.lock().await.len()
    }
}

#[async_trait]
impl NotificationPusher for WebSocketNotificationPusher {
    async fn register_connection(&self, connection_id: ConnectionId, channel: PusherChannel) {
        let mut connections = self.connections.lock().await;
        tracing::debug!("Connection '{}' registered to pusher", connection_id);
        connections.insert(connection_id, channel);
    }

    async fn unregister_connection(&self, connection_id: &ConnectionId) {
        let mut connections = self.connections.lock().await;
        connections.remove(connection_id);
        tracing::debug!("Connection '{}' unregistered from pusher", connection_id);
    }

    async fn push_to(&self, connection_id: &ConnectionId, content: &str) -> Result<(), PushError> {
        let connections = self.connections.lock().await;

        let sender = connections
            .get(connection_id)
            .ok_or_else(|| PushError::ConnectionNotFound(connection_id.as_str().to_string()))?;
        sender
            .send(content.to_string())
            .map_err(|e| PushError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed message to connection '{}'", connection_id);
        Ok(())
    }

    async fn push_guest_status(
        &self,
        connection_id: &ConnectionId,
        notification: &GuestStatusNotification,
    ) -> Result<(), PushError> {
        let message = GuestStatusUpdateMessage::from_notification(notification, self.utc_offset);
        let json = serde_json::to_string(&message).map_err(|e| PushError::Encode(e.to_string()))?;
        self.push_to(connection_id, &json).await
    }
}
