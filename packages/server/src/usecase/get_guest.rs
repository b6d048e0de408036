//! UseCase: ゲスト記録の取得
//!
//! 通知を受けた学科長の画面は、この結果（永続化された状態）で表示を確定させる。

use std::sync::Arc;

use crate::domain::{Guest, GuestId, GuestRepository};

use super::error::GetGuestError;

pub struct GetGuestUseCase {
    repository: Arc<dyn GuestRepository>,
}

impl GetGuestUseCase {
    pub fn new(repository: Arc<dyn GuestRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, guest_id: GuestId) -> Result<Guest, GetGuestError> {
        self.repository
            .find_by_id(guest_id)
            .await
            .ok_or(GetGuestError::GuestNotFound(guest_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timestamp;
    use crate::infrastructure::repository::InMemoryGuestRepository;
    use crate::infrastructure::repository::inmemory::guest::tests::new_guest;

    #[tokio::test]
    async fn test_get_guest_found() {
        // テスト項目: 登録済みのゲストを取得できる
        // given (前提条件):
        let repository = Arc::new(InMemoryGuestRepository::new());
        let guest = repository
            .insert(new_guest(7, "Ada"), Timestamp::new(1000))
            .await;
        let usecase = GetGuestUseCase::new(repository);

        // when (操作):
        let result = usecase.execute(guest.id).await;

        // then (期待する結果):
        assert_eq!(result, Ok(guest));
    }

    #[tokio::test]
    async fn test_get_guest_not_found() {
        // テスト項目: 存在しない ID は GuestNotFound
        // given (前提条件):
        let usecase = GetGuestUseCase::new(Arc::new(InMemoryGuestRepository::new()));

        // when (操作):
        let result = usecase.execute(GuestId::new(99)).await;

        // then (期待する結果):
        assert_eq!(result, Err(GetGuestError::GuestNotFound(GuestId::new(99))));
    }
}
