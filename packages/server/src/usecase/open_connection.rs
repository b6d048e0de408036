//! UseCase: WebSocket 接続の受付
//!
//! 接続ごとに払い出した ID と送信チャンネルを NotificationPusher に登録する。
//! この時点では学科との対応付けは行わない（`register-hod` を受けてから）。

use std::sync::Arc;

use crate::domain::{
    ConnectionId, ConnectionIdFactory, NotificationPusher, PushError, PusherChannel,
};

/// 接続受付のユースケース
pub struct OpenConnectionUseCase {
    pusher: Arc<dyn NotificationPusher>,
}

impl OpenConnectionUseCase {
    pub fn new(pusher: Arc<dyn NotificationPusher>) -> Self {
        Self { pusher }
    }

    /// 接続 ID を払い出し、送信チャンネルを登録する
    pub async fn execute(&self, channel: PusherChannel) -> ConnectionId {
        let connection_id = ConnectionIdFactory::generate();
        self.pusher
            .register_connection(connection_id.clone(), channel)
            .await;
        connection_id
    }

    /// 接続へ任意のメッセージ（JSON）を送る
    pub async fn reply(&self, connection_id: &ConnectionId, message: &str) -> Result<(), PushError> {
        self.pusher.push_to(connection_id, message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::message_pusher::WebSocketNotificationPusher;
    use campus_entry_shared::time::utc_offset_from_minutes;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_open_connection_registers_channel() {
        // テスト項目: 接続受付後、払い出された ID へ送信できる
        // given (前提条件):
        let pusher = Arc::new(WebSocketNotificationPusher::new(
            utc_offset_from_minutes(0).unwrap(),
        ));
        let usecase = OpenConnectionUseCase::new(pusher.clone());
        let (tx, mut rx) = mpsc::unbounded_channel();

        // when (操作):
        let connection_id = usecase.execute(tx).await;
        let result = usecase.reply(&connection_id, "hello").await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(rx.recv().await, Some("hello".to_string()));
        assert_eq!(pusher.connection_count().await, 1);
    }

    #[tokio::test]
    async fn test_each_connection_gets_distinct_id() {
        // テスト項目: 接続ごとに異なる ID が払い出される
        // given (前提条件):
        let pusher = Arc::new(WebSocketNotificationPusher::new(
            utc_offset_from_minutes(0).unwrap(),
        ));
        let usecase = OpenConnectionUseCase::new(pusher.clone());
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, _rx2) = mpsc::unbounded_channel();

        // when (操作):
        let first = usecase.execute(tx1).await;
        let second = usecase.execute(tx2).await;

        // then (期待する結果):
        assert_ne!(first, second);
        assert_eq!(pusher.connection_count().await, 2);
    }
}
