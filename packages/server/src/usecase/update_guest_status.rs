//! UseCase: ゲストのステータス更新と学科長への通知
//!
//! ## 二層の契約
//!
//! - ゲスト記録の `status` が唯一の正（永続化された状態）
//! - 学科長への通知は低遅延のヒントに過ぎない（best-effort、高々 1 回）
//!
//! 通知の成否はステータス更新の成否に影響しない。接続が無い場合は何もしない。
//!
//! ## 終端ステータスの扱い
//!
//! Approved / Rejected のゲストへの再決定は `AlreadyDecided` で拒否し、
//! 記録の変更も通知も行わない。

use std::sync::Arc;

use campus_entry_shared::time::Clock;

use crate::domain::{
    ConnectionId, ConnectionRegistry, Guest, GuestDecision, GuestId, GuestRepository,
    GuestStatus, GuestStatusError, NotificationPusher, RepositoryError, Timestamp,
};

use super::error::UpdateGuestStatusError;

/// 通知の配送結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationDelivery {
    /// 学科長の接続へ送信キューに積んだ
    Pushed(ConnectionId),
    /// 学科に登録中の接続が無かった（エラーではない）
    NoConnection,
    /// 接続は登録されていたが送信に失敗した（ログのみ）
    Failed(ConnectionId),
}

/// ステータス更新の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestStatusChange {
    pub guest: Guest,
    pub delivery: NotificationDelivery,
}

/// ゲストのステータス更新のユースケース
pub struct UpdateGuestStatusUseCase {
    /// Repository（ゲスト記録）
    repository: Arc<dyn GuestRepository>,
    /// 学科 ID → 学科長の接続
    registry: Arc<dyn ConnectionRegistry>,
    /// NotificationPusher（通知送信の抽象化）
    pusher: Arc<dyn NotificationPusher>,
    clock: Arc<dyn Clock>,
}

impl UpdateGuestStatusUseCase {
    pub fn new(
        repository: Arc<dyn GuestRepository>,
        registry: Arc<dyn ConnectionRegistry>,
        pusher: Arc<dyn NotificationPusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            registry,
            pusher,
            clock,
        }
    }

    /// ステータス更新を実行
    ///
    /// # Arguments
    ///
    /// * `guest_id` - 更新するゲストの ID
    /// * `decision` - Approved / Rejected
    ///
    /// # Returns
    ///
    /// * `Ok(GuestStatusChange)` - 更新成功（通知の成否を問わない）
    /// * `Err(UpdateGuestStatusError)` - 更新前に拒否された
    pub async fn execute(
        &self,
        guest_id: GuestId,
        decision: GuestDecision,
    ) -> Result<GuestStatusChange, UpdateGuestStatusError> {
        // 1. 存在チェック
        let guest = self
            .repository
            .find_by_id(guest_id)
            .await
            .ok_or(UpdateGuestStatusError::GuestNotFound(guest_id))?;

        // 2. 終端ステータスのチェック
        let next_status = guest
            .status
            .decide(decision)
            .map_err(|GuestStatusError::AlreadyDecided(current)| {
                UpdateGuestStatusError::AlreadyDecided { guest_id, current }
            })?;

        // 3. Pending の場合のみ更新（同時更新は片方だけ成功する）
        let updated_at = Timestamp::new(self.clock.now_millis());
        let guest = self
            .repository
            .update_status_if(guest_id, GuestStatus::Pending, next_status, updated_at)
            .await
            .map_err(|e| match e {
                RepositoryError::GuestNotFound(id) => UpdateGuestStatusError::GuestNotFound(id),
                RepositoryError::StatusConflict { current, .. } => {
                    UpdateGuestStatusError::AlreadyDecided { guest_id, current }
                }
            })?;
        tracing::info!(
            "Guest {} of department {} is now {}",
            guest.id,
            guest.department_id,
            guest.status.as_str()
        );

        // 4. 学科長への通知（best-effort）
        let delivery = self.notify_department_head(&guest).await;

        Ok(GuestStatusChange { guest, delivery })
    }

    async fn notify_department_head(&self, guest: &Guest) -> NotificationDelivery {
        let Some(connection_id) = self.registry.lookup(guest.department_id).await else {
            tracing::debug!(
                "No department head connected for department {}, skipping notification",
                guest.department_id
            );
            return NotificationDelivery::NoConnection;
        };

        match self
            .pusher
            .push_guest_status(&connection_id, &guest.status_notification())
            .await
        {
            Ok(()) => {
                tracing::info!(
                    "Notified department {} head on connection '{}'",
                    guest.department_id,
                    connection_id
                );
                NotificationDelivery::Pushed(connection_id)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to notify department {} head on connection '{}': {}",
                    guest.department_id,
                    connection_id,
                    e
                );
                NotificationDelivery::Failed(connection_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{DepartmentId, PushError, notification_pusher::MockNotificationPusher},
        infrastructure::{
            message_pusher::WebSocketNotificationPusher,
            registry::InMemoryConnectionRegistry,
            repository::{InMemoryGuestRepository, inmemory::guest::tests::new_guest},
        },
    };
    use campus_entry_shared::time::{FixedClock, utc_offset_from_minutes};
    use tokio::sync::mpsc;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - 接続が無い学科のゲスト更新は成功し、通知は行われない
    // - 接続がある学科には 1 回だけ通知される
    // - 送信失敗は更新結果に影響しない
    // - 終端ステータスの再決定は拒否され、通知も行われない
    // - 存在しないゲストは更新前に拒否される
    // ========================================

    const NOW: i64 = 1768852800000;

    fn dept(id: u32) -> DepartmentId {
        DepartmentId::new(id).unwrap()
    }

    fn conn(id: &str) -> ConnectionId {
        ConnectionId::new(id.to_string()).unwrap()
    }

    struct Fixture {
        repository: Arc<InMemoryGuestRepository>,
        registry: Arc<InMemoryConnectionRegistry>,
        pusher: Arc<WebSocketNotificationPusher>,
        usecase: UpdateGuestStatusUseCase,
    }

    fn create_fixture() -> Fixture {
        let repository = Arc::new(InMemoryGuestRepository::new());
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let pusher = Arc::new(WebSocketNotificationPusher::new(
            utc_offset_from_minutes(330).unwrap(),
        ));
        let usecase = UpdateGuestStatusUseCase::new(
            repository.clone(),
            registry.clone(),
            pusher.clone(),
            Arc::new(FixedClock::new(NOW)),
        );
        Fixture {
            repository,
            registry,
            pusher,
            usecase,
        }
    }

    #[tokio::test]
    async fn test_update_without_connection_succeeds_silently() {
        // テスト項目: 接続の無い学科のゲストを承認しても成功し、通知は行われない
        // given (前提条件):
        let fixture = create_fixture();
        let guest = fixture
            .repository
            .insert(new_guest(7, "Ada"), Timestamp::new(1000))
            .await;

        // when (操作):
        let result = fixture
            .usecase
            .execute(guest.id, GuestDecision::Approved)
            .await;

        // then (期待する結果):
        let change = result.unwrap();
        assert_eq!(change.delivery, NotificationDelivery::NoConnection);
        assert_eq!(change.guest.status, GuestStatus::Approved);
        assert_eq!(change.guest.updated_at, Timestamp::new(NOW));
        let stored = fixture.repository.find_by_id(guest.id).await.unwrap();
        assert_eq!(stored.status, GuestStatus::Approved);
    }

    #[tokio::test]
    async fn test_update_pushes_exactly_once_to_registered_connection() {
        // テスト項目: 学科に登録された接続へ 1 回だけ通知される
        // given (前提条件):
        let fixture = create_fixture();
        let (tx, mut rx) = mpsc::unbounded_channel();
        fixture
            .pusher
            .register_connection(conn("sock-A"), tx)
            .await;
        fixture.registry.register(dept(7), conn("sock-A")).await;
        let guest = fixture
            .repository
            .insert(new_guest(7, "Ada"), Timestamp::new(1000))
            .await;

        // when (操作):
        let result = fixture
            .usecase
            .execute(guest.id, GuestDecision::Rejected)
            .await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap().delivery,
            NotificationDelivery::Pushed(conn("sock-A"))
        );
        let pushed: serde_json::Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
        assert_eq!(pushed["guestName"], "Ada");
        assert_eq!(pushed["status"], "Rejected");
        assert_eq!(pushed["date"], "1/20/2026");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_update_only_notifies_own_department() {
        // テスト項目: 他学科の接続には通知されない
        // given (前提条件):
        let fixture = create_fixture();
        let (tx, mut rx) = mpsc::unbounded_channel();
        fixture
            .pusher
            .register_connection(conn("sock-B"), tx)
            .await;
        fixture.registry.register(dept(8), conn("sock-B")).await;
        let guest = fixture
            .repository
            .insert(new_guest(7, "Ada"), Timestamp::new(1000))
            .await;

        // when (操作):
        let result = fixture
            .usecase
            .execute(guest.id, GuestDecision::Approved)
            .await;

        // then (期待する結果):
        assert_eq!(result.unwrap().delivery, NotificationDelivery::NoConnection);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_push_failure_does_not_fail_update() {
        // テスト項目: 送信に失敗してもステータス更新は成功として報告される
        // given (前提条件):
        let repository = Arc::new(InMemoryGuestRepository::new());
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        registry.register(dept(7), conn("sock-dead")).await;
        let mut pusher = MockNotificationPusher::new();
        pusher
            .expect_push_guest_status()
            .times(1)
            .returning(|_, _| Err(PushError::PushFailed("channel closed".to_string())));
        let usecase = UpdateGuestStatusUseCase::new(
            repository.clone(),
            registry,
            Arc::new(pusher),
            Arc::new(FixedClock::new(NOW)),
        );
        let guest = repository
            .insert(new_guest(7, "Ada"), Timestamp::new(1000))
            .await;

        // when (操作):
        let result = usecase.execute(guest.id, GuestDecision::Approved).await;

        // then (期待する結果):
        let change = result.unwrap();
        assert_eq!(change.delivery, NotificationDelivery::Failed(conn("sock-dead")));
        assert_eq!(change.guest.status, GuestStatus::Approved);
    }

    #[tokio::test]
    async fn test_terminal_guest_is_rejected_without_push() {
        // テスト項目: 承認済みのゲストへの再決定は拒否され、通知も行われない
        // given (前提条件):
        let repository = Arc::new(InMemoryGuestRepository::new());
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        registry.register(dept(7), conn("sock-A")).await;
        let mut pusher = MockNotificationPusher::new();
        // 最初の承認でのみ通知される
        pusher
            .expect_push_guest_status()
            .times(1)
            .returning(|_, _| Ok(()));
        let usecase = UpdateGuestStatusUseCase::new(
            repository.clone(),
            registry,
            Arc::new(pusher),
            Arc::new(FixedClock::new(NOW)),
        );
        let guest = repository
            .insert(new_guest(7, "Ada"), Timestamp::new(1000))
            .await;
        usecase
            .execute(guest.id, GuestDecision::Approved)
            .await
            .unwrap();

        // when (操作):
        let reapprove = usecase.execute(guest.id, GuestDecision::Approved).await;
        let flip = usecase.execute(guest.id, GuestDecision::Rejected).await;

        // then (期待する結果):
        let expected = Err(UpdateGuestStatusError::AlreadyDecided {
            guest_id: guest.id,
            current: GuestStatus::Approved,
        });
        assert_eq!(reapprove, expected);
        assert_eq!(flip, expected);
        let stored = repository.find_by_id(guest.id).await.unwrap();
        assert_eq!(stored.status, GuestStatus::Approved);
    }

    #[tokio::test]
    async fn test_unknown_guest_is_rejected() {
        // テスト項目: 存在しないゲストは GuestNotFound で、通知も行われない
        // given (前提条件):
        let mut pusher = MockNotificationPusher::new();
        pusher.expect_push_guest_status().never();
        let usecase = UpdateGuestStatusUseCase::new(
            Arc::new(InMemoryGuestRepository::new()),
            Arc::new(InMemoryConnectionRegistry::new()),
            Arc::new(pusher),
            Arc::new(FixedClock::new(NOW)),
        );

        // when (操作):
        let result = usecase
            .execute(GuestId::new(404), GuestDecision::Approved)
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(UpdateGuestStatusError::GuestNotFound(GuestId::new(404)))
        );
    }

    #[tokio::test]
    async fn test_concurrent_decisions_only_one_wins() {
        // テスト項目: 同じ Pending ゲストへの同時決定は片方だけ成功する
        // given (前提条件):
        let fixture = create_fixture();
        let usecase = Arc::new(fixture.usecase);
        let guest = fixture
            .repository
            .insert(new_guest(7, "Ada"), Timestamp::new(1000))
            .await;
        let guest_id = guest.id;

        // when (操作):
        let approve = {
            let usecase = usecase.clone();
            tokio::spawn(async move { usecase.execute(guest_id, GuestDecision::Approved).await })
        };
        let reject = {
            let usecase = usecase.clone();
            tokio::spawn(async move { usecase.execute(guest_id, GuestDecision::Rejected).await })
        };
        let results = [approve.await.unwrap(), reject.await.unwrap()];

        // then (期待する結果):
        let successes: Vec<&GuestStatusChange> =
            results.iter().filter_map(|r| r.as_ref().ok()).collect();
        assert_eq!(successes.len(), 1);
        let stored = fixture.repository.find_by_id(guest_id).await.unwrap();
        assert_eq!(stored.status, successes[0].guest.status);
    }
}
