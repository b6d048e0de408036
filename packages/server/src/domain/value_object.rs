//! Value Object 定義
//!
//! 生成時にバリデーションを行い、不正な値を持つインスタンスが存在しないことを保証する。

use chrono::NaiveDate;
use uuid::Uuid;

use super::error::ValueObjectError;

/// Contact numbers are exactly this many digits.
pub const CONTACT_NUMBER_LENGTH: usize = 10;

/// Visit purposes shorter than this (after trimming) are rejected.
pub const VISIT_PURPOSE_MIN_LENGTH: usize = 5;

/// Unix timestamp in milliseconds (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 学科 ID
///
/// 0 は学科 ID として扱わない（未設定と区別できないため）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DepartmentId(u32);

impl DepartmentId {
    pub fn new(value: u32) -> Result<Self, ValueObjectError> {
        if value == 0 {
            return Err(ValueObjectError::DepartmentIdRequired);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for DepartmentId {
    type Error = ValueObjectError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let value = u32::try_from(value)
            .map_err(|_| ValueObjectError::InvalidDepartmentId(value.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<&str> for DepartmentId {
    type Error = ValueObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::DepartmentIdRequired);
        }
        let parsed = trimmed
            .parse::<u32>()
            .map_err(|_| ValueObjectError::InvalidDepartmentId(value.to_string()))?;
        Self::new(parsed)
    }
}

impl std::fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ゲスト ID（自動採番）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GuestId(u64);

impl GuestId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// 次の ID
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for GuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// WebSocket 接続 ID
///
/// サーバー側で接続ごとに払い出す不透明な文字列。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::EmptyConnectionId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ConnectionId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// ConnectionId の生成
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    /// UUID v4 から新しい ConnectionId を生成する
    pub fn generate() -> ConnectionId {
        ConnectionId(Uuid::new_v4().to_string())
    }
}

/// ゲスト名（英字と空白のみ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestName(String);

impl GuestName {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::GuestNameRequired);
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        {
            return Err(ValueObjectError::InvalidGuestName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 連絡先電話番号（10 桁の数字）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactNumber(String);

impl ContactNumber {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::ContactRequired);
        }
        if value.len() != CONTACT_NUMBER_LENGTH || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValueObjectError::InvalidContact);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 訪問目的
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitPurpose(String);

impl VisitPurpose {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::VisitPurposeRequired);
        }
        if trimmed.chars().count() < VISIT_PURPOSE_MIN_LENGTH {
            return Err(ValueObjectError::VisitPurposeTooShort(VISIT_PURPOSE_MIN_LENGTH));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 訪問予定日
///
/// 登録日の翌日以降でなければならない（当日は不可）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitDate(NaiveDate);

impl VisitDate {
    pub fn new(date: NaiveDate, today: NaiveDate) -> Result<Self, ValueObjectError> {
        if date <= today {
            return Err(ValueObjectError::VisitDateNotInFuture);
        }
        Ok(Self(date))
    }

    /// `YYYY-MM-DD` 形式の文字列から生成する
    pub fn parse(value: &str, today: NaiveDate) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::VisitDateRequired);
        }
        let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map_err(|_| ValueObjectError::InvalidVisitDate(value.to_string()))?;
        Self::new(date, today)
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }
}

/// 入構予定時刻（必須の自由入力）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnterTime(String);

impl EnterTime {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::EnterTimeRequired);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
