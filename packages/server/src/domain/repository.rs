//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{
    Department, DepartmentId, Guest, GuestId, GuestStatus, NewGuest, RepositoryError, Timestamp,
};

/// Guest Repository trait
///
/// ゲスト訪問記録の永続化先（ドキュメントストア）へのインターフェース。
/// ステータスの永続値が唯一の正であり、通知はそのヒントに過ぎない。
#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// ID を採番してゲストを保存する（採番: 既存の最大 ID + 1）
    async fn insert(&self, new_guest: NewGuest, now: Timestamp) -> Guest;

    /// ID でゲストを取得
    async fn find_by_id(&self, guest_id: GuestId) -> Option<Guest>;

    /// 学科のゲスト一覧を取得（新しい順）
    async fn list_by_department(&self, department_id: DepartmentId) -> Vec<Guest>;

    /// 現在のステータスが `expected` の場合のみ `status` に更新する
    ///
    /// 更新後のゲストを返す。ゲストが存在しない場合は `GuestNotFound`、
    /// ステータスが一致しない場合は `StatusConflict`。
    async fn update_status_if(
        &self,
        guest_id: GuestId,
        expected: GuestStatus,
        status: GuestStatus,
        updated_at: Timestamp,
    ) -> Result<Guest, RepositoryError>;

    /// Pending かつ未読のゲスト数
    async fn count_unread_pending(&self) -> usize;

    /// Pending かつ未読のゲストを全て既読にし、更新件数を返す
    async fn mark_all_pending_read(&self) -> usize;
}

/// Department Repository trait
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// 全学科を ID 順で取得
    async fn list_departments(&self) -> Vec<Department>;
}
