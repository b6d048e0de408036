//! NotificationPusher trait 定義
//!
//! 接続ごとの送信チャンネルを管理し、接続へ通知を送る。
//! 送信は best-effort であり、到達確認・再送・バッファリングは行わない。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, GuestStatusNotification, PushError};

/// 接続へ送るテキストフレームのチャンネル
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationPusher: Send + Sync {
    /// 接続の送信チャンネルを登録
    async fn register_connection(&self, connection_id: ConnectionId, channel: PusherChannel);

    /// 接続の送信チャンネルを登録解除
    async fn unregister_connection(&self, connection_id: &ConnectionId);

    /// 接続へ任意のテキストを送る
    async fn push_to(&self, connection_id: &ConnectionId, content: &str) -> Result<(), PushError>;

    /// 接続へゲストのステータス変更通知を送る
    async fn push_guest_status(
        &self,
        connection_id: &ConnectionId,
        notification: &GuestStatusNotification,
    ) -> Result<(), PushError>;
}
