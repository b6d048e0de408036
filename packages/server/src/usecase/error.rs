//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{GuestId, GuestStatus, ValueObjectError};

/// ゲスト登録のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterGuestError {
    /// 入力値の検証エラー（失敗した全項目を保持する）
    #[error("{}", join_messages(.0))]
    Validation(Vec<ValueObjectError>),
}

fn join_messages(errors: &[ValueObjectError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// ゲストのステータス更新のエラー
///
/// いずれの場合もゲスト記録と Registry は変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateGuestStatusError {
    #[error("Guest not found")]
    GuestNotFound(GuestId),

    /// 既に Approved / Rejected のゲストに対する再決定
    #[error("Guest has already been {}", .current.as_str().to_lowercase())]
    AlreadyDecided {
        guest_id: GuestId,
        current: GuestStatus,
    },
}

/// ゲスト取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetGuestError {
    #[error("Guest not found")]
    GuestNotFound(GuestId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_joins_messages() {
        // テスト項目: 検証エラーは全項目のメッセージをカンマ区切りで表示する
        // given (前提条件):
        let error = RegisterGuestError::Validation(vec![
            ValueObjectError::InvalidGuestName,
            ValueObjectError::InvalidContact,
        ]);

        // when (操作):
        let message = error.to_string();

        // then (期待する結果):
        assert_eq!(
            message,
            "Guest name should contain only letters and spaces, Contact number must be exactly 10 digits"
        );
    }

    #[test]
    fn test_already_decided_message() {
        // テスト項目: 再決定エラーのメッセージに現在のステータスが入る
        // given (前提条件):
        let error = UpdateGuestStatusError::AlreadyDecided {
            guest_id: GuestId::new(1),
            current: GuestStatus::Approved,
        };

        // when (操作):
        let message = error.to_string();

        // then (期待する結果):
        assert_eq!(message, "Guest has already been approved");
    }
}
