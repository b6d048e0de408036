//! InMemory Guest Repository 実装
//!
//! ドメイン層が定義する GuestRepository trait の具体的な実装。
//! ドキュメントストアの代わりに BTreeMap を使用します。
//!
//! 採番とステータスの比較更新は 1 回のロック内で行うため、
//! 同時リクエストでも ID の重複や終端ステータスの上書きは起きない。

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    DepartmentId, Guest, GuestId, GuestRepository, GuestStatus, NewGuest, RepositoryError,
    Timestamp,
};

/// インメモリ Guest Repository 実装
#[derive(Default)]
pub struct InMemoryGuestRepository {
    /// Key: ゲスト ID（昇順なので最後の要素が最大 ID）
    guests: Mutex<BTreeMap<GuestId, Guest>>,
}

impl InMemoryGuestRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GuestRepository for InMemoryGuestRepository {
    async fn insert(&self, new_guest: NewGuest, now: Timestamp) -> Guest {
        let mut guests = self.guests.lock().await;
        let guest_id = guests
            .keys()
            .next_back()
            .map(GuestId::next)
            .unwrap_or(GuestId::new(1));
        let guest = Guest::register(guest_id, new_guest, now);
        guests.insert(guest_id, guest.clone());
        guest
    }

    async fn find_by_id(&self, guest_id: GuestId) -> Option<Guest> {
        let guests = self.guests.lock().await;
        guests.get(&guest_id).cloned()
    }

    async fn list_by_department(&self, department_id: DepartmentId) -> Vec<Guest> {
        let guests = self.guests.lock().await;
        let mut result: Vec<Guest> = guests
            .values()
            .filter(|guest| guest.department_id == department_id)
            .cloned()
            .collect();
        // Newest first; the id breaks ties between guests created in the same millisecond.
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        result
    }

    async fn update_status_if(
        &self,
        guest_id: GuestId,
        expected: GuestStatus,
        status: GuestStatus,
        updated_at: Timestamp,
    ) -> Result<Guest, RepositoryError> {
        let mut guests = self.guests.lock().await;
        let guest = guests
            .get_mut(&guest_id)
            .ok_or(RepositoryError::GuestNotFound(guest_id))?;
        if guest.status != expected {
            return Err(RepositoryError::StatusConflict {
                guest_id,
                expected,
                current: guest.status,
            });
        }
        guest.status = status;
        guest.updated_at = updated_at;
        Ok(guest.clone())
    }

    async fn count_unread_pending(&self) -> usize {
        let guests = self.guests.lock().await;
        guests.values().filter(|guest| guest.is_unread_pending()).count()
    }

    async fn mark_all_pending_read(&self) -> usize {
        let mut guests = self.guests.lock().await;
        let mut marked = 0;
        for guest in guests.values_mut().filter(|guest| guest.is_unread_pending()) {
            guest.is_read = true;
            marked += 1;
        }
        marked
    }
}
