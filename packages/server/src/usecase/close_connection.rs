//! UseCase: WebSocket 接続の終了処理
//!
//! 切断理由（ログアウト・ネットワーク断・タブを閉じる）を問わず、
//! Registry と NotificationPusher の両方から接続を取り除く。

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, DepartmentId, NotificationPusher};

/// 接続終了のユースケース
pub struct CloseConnectionUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    pusher: Arc<dyn NotificationPusher>,
}

impl CloseConnectionUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>, pusher: Arc<dyn NotificationPusher>) -> Self {
        Self { registry, pusher }
    }

    /// 接続終了を実行
    ///
    /// # Returns
    ///
    /// 登録が解除された学科 ID のリスト（学科長でない接続なら空）
    pub async fn execute(&self, connection_id: &ConnectionId) -> Vec<DepartmentId> {
        let departments = self.registry.unregister(connection_id).await;
        self.pusher.unregister_connection(connection_id).await;
        for department_id in &departments {
            tracing::info!(
                "Department {} head disconnected (connection '{}')",
                department_id,
                connection_id
            );
        }
        departments
    }
}
