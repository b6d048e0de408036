//! Domain errors.

use thiserror::Error;

use super::{entity::GuestStatus, value_object::GuestId};

/// Value Object の生成エラー
///
/// メッセージはそのまま API のエラーレスポンスに使われる。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("Department ID (dId) is required.")]
    DepartmentIdRequired,

    #[error("Invalid Department ID: '{0}'")]
    InvalidDepartmentId(String),

    #[error("Connection ID must not be empty")]
    EmptyConnectionId,

    #[error("Guest name is required")]
    GuestNameRequired,

    #[error("Guest name should contain only letters and spaces")]
    InvalidGuestName,

    #[error("Contact number is required")]
    ContactRequired,

    #[error("Contact number must be exactly 10 digits")]
    InvalidContact,

    #[error("Visit purpose is required")]
    VisitPurposeRequired,

    #[error("Purpose should have at least {0} characters")]
    VisitPurposeTooShort(usize),

    #[error("Visit date is required")]
    VisitDateRequired,

    #[error("Invalid visit date '{0}', expected YYYY-MM-DD")]
    InvalidVisitDate(String),

    #[error("Visit date must be a future date (not today)")]
    VisitDateNotInFuture,

    #[error("Enter time is required")]
    EnterTimeRequired,

    #[error("Invalid status")]
    InvalidStatus(String),
}

/// ゲストのステータス遷移エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuestStatusError {
    #[error("Guest has already been {}", .0.as_str().to_lowercase())]
    AlreadyDecided(GuestStatus),
}

/// Repository のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Guest {0} not found")]
    GuestNotFound(GuestId),

    /// 比較対象のステータスが一致しなかった（他のリクエストが先に更新した）
    #[error("Guest {guest_id} is {current:?}, expected {expected:?}")]
    StatusConflict {
        guest_id: GuestId,
        expected: GuestStatus,
        current: GuestStatus,
    },
}

/// 通知の送信エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PushError {
    #[error("Connection '{0}' is not registered")]
    ConnectionNotFound(String),

    #[error("Failed to push notification: {0}")]
    PushFailed(String),

    #[error("Failed to encode notification: {0}")]
    Encode(String),
}
