//! UseCase: 大学管理者向けの未読ゲスト
//!
//! 「未読」は Pending かつ `is_read == false` のゲスト。
//! 既読フラグはステータスとは独立で、一括既読でのみ立つ。

use std::sync::Arc;

use crate::domain::GuestRepository;

/// 未読件数の取得
pub struct CountUnreadGuestsUseCase {
    repository: Arc<dyn GuestRepository>,
}

impl CountUnreadGuestsUseCase {
    pub fn new(repository: Arc<dyn GuestRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> usize {
        self.repository.count_unread_pending().await
    }
}

/// 一括既読
pub struct MarkAllGuestsReadUseCase {
    repository: Arc<dyn GuestRepository>,
}

impl MarkAllGuestsReadUseCase {
    pub fn new(repository: Arc<dyn GuestRepository>) -> Self {
        Self { repository }
    }

    /// 既読にした件数を返す
    pub async fn execute(&self) -> usize {
        let marked = self.repository.mark_all_pending_read().await;
        tracing::debug!("Marked {} pending guests as read", marked);
        marked
    }
}
