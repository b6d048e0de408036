//! UseCase: 学科長セッションの登録
//!
//! `register-hod` イベントを受けて、学科 → 接続の対応を Registry に登録する。
//! 同じ学科の既存の接続は置き換えられる（後勝ち）が、切断はしない。

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, DepartmentId};

/// 学科長登録のユースケース
pub struct RegisterDepartmentHeadUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl RegisterDepartmentHeadUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// 登録を実行
    ///
    /// # Returns
    ///
    /// 置き換えられた接続 ID（あれば）
    pub async fn execute(
        &self,
        department_id: DepartmentId,
        connection_id: ConnectionId,
    ) -> Option<ConnectionId> {
        let replaced = self
            .registry
            .register(department_id, connection_id.clone())
            .await;
        match &replaced {
            Some(previous) => tracing::info!(
                "Department {} head moved from connection '{}' to '{}'",
                department_id,
                previous,
                connection_id
            ),
            None => tracing::info!(
                "Department {} head registered on connection '{}'",
                department_id,
                connection_id
            ),
        }
        replaced
    }
}
