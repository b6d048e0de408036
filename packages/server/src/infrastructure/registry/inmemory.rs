//! InMemory Connection Registry 実装
//!
//! ドメイン層が定義する `ConnectionRegistry` trait の具体的な実装。
//! 学科 ID をキーとする HashMap なので、1 学科 1 接続が構造的に保証される。
//!
//! 登録順は Mutex の獲得順で決まる（後勝ち）。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, ConnectionRegistry, DepartmentId, RegistryEntry};

/// インメモリ Connection Registry 実装
///
/// 合成ルートでプロセス起動時に生成し、`Arc<dyn ConnectionRegistry>` として
/// 各 UseCase に注入する。
#[derive(Default)]
pub struct InMemoryConnectionRegistry {
    /// Key: 学科 ID, Value: その学科の学科長の接続 ID
    entries: Mutex<HashMap<DepartmentId, ConnectionId>>,
}

impl InMemoryConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(
        &self,
        department_id: DepartmentId,
        connection_id: ConnectionId,
    ) -> Option<ConnectionId> {
        let mut entries = self.entries.lock().await;
        let replaced = entries.insert(department_id, connection_id.clone());
        tracing::debug!(
            "Department {} registered to connection '{}'",
            department_id,
            connection_id
        );
        replaced.filter(|previous| previous != &connection_id)
    }

    async fn unregister(&self, connection_id: &ConnectionId) -> Vec<DepartmentId> {
        let mut entries = self.entries.lock().await;
        let mut removed: Vec<DepartmentId> = entries
            .iter()
            .filter(|(_, registered)| *registered == connection_id)
            .map(|(department_id, _)| *department_id)
            .collect();
        for department_id in &removed {
            entries.remove(department_id);
        }
        removed.sort();
        if !removed.is_empty() {
            tracing::debug!(
                "Connection '{}' unregistered from departments {:?}",
                connection_id,
                removed
            );
        }
        removed
    }

    async fn lookup(&self, department_id: DepartmentId) -> Option<ConnectionId> {
        let entries = self.entries.lock().await;
        entries.get(&department_id).cloned()
    }

    async fn entries(&self) -> Vec<RegistryEntry> {
        let entries = self.entries.lock().await;
        let mut snapshot: Vec<RegistryEntry> = entries
            .iter()
            .map(|(department_id, connection_id)| RegistryEntry {
                department_id: *department_id,
                connection_id: connection_id.clone(),
            })
            .collect();
        snapshot.sort_by_key(|entry| entry.department_id);
        snapshot
    }
}
