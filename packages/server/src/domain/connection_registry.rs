//! Connection Registry trait 定義
//!
//! 学科 ID から、その学科の学科長セッションの接続 ID への対応表。
//!
//! ## 契約
//!
//! - 学科ごとに保持する接続は高々 1 つ（後勝ち）
//! - 上書きされた古い接続は宛先として使われなくなるだけで、切断はしない
//! - 全ての操作は全域関数（エラーを返さない）
//! - 永続化しない（プロセス再起動で空になり、学科長は再登録する）

use async_trait::async_trait;

use super::{ConnectionId, DepartmentId, RegistryEntry};

#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// 学科の接続を登録（既存の接続は置き換える）
    ///
    /// 置き換えられた接続 ID を返す。
    async fn register(
        &self,
        department_id: DepartmentId,
        connection_id: ConnectionId,
    ) -> Option<ConnectionId>;

    /// 接続に対応する全てのエントリを削除
    ///
    /// 削除された学科 ID を返す。未登録の接続 ID なら何もしない。
    async fn unregister(&self, connection_id: &ConnectionId) -> Vec<DepartmentId>;

    /// 学科の現在の接続を取得
    async fn lookup(&self, department_id: DepartmentId) -> Option<ConnectionId>;

    /// 全エントリのスナップショット（学科 ID 順）
    async fn entries(&self) -> Vec<RegistryEntry>;
}
