//! Time-related utilities with clock abstraction for testability.
//!
//! Timestamps are Unix milliseconds (UTC). Human-facing renderings use a
//! fixed UTC offset chosen by configuration, since the campus runs in a
//! single time zone.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get current Unix timestamp (milliseconds)
    fn now_millis(&self) -> i64;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        get_unix_timestamp_millis()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: i64,
}

impl FixedClock {
    /// Create a new fixed clock with the given timestamp
    pub fn new(fixed_time_millis: i64) -> Self {
        Self {
            fixed_time: fixed_time_millis,
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.fixed_time
    }
}

/// Get current Unix timestamp (milliseconds)
pub fn get_unix_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Build a fixed offset from a number of minutes east of UTC.
///
/// Returns `None` when the offset is out of range (more than a day).
pub fn utc_offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    FixedOffset::east_opt(minutes.checked_mul(60)?)
}

fn to_offset(timestamp_millis: i64, offset: FixedOffset) -> DateTime<FixedOffset> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_millis)
        .unwrap_or_default()
        .with_timezone(&offset)
}

/// Convert Unix timestamp (milliseconds) to RFC 3339 in the given offset
pub fn timestamp_to_rfc3339(timestamp_millis: i64, offset: FixedOffset) -> String {
    to_offset(timestamp_millis, offset).to_rfc3339()
}

/// Convert Unix timestamp (milliseconds) to a locale-style date (`M/D/YYYY`)
pub fn timestamp_to_locale_date(timestamp_millis: i64, offset: FixedOffset) -> String {
    to_offset(timestamp_millis, offset)
        .format("%-m/%-d/%Y")
        .to_string()
}

/// Calendar date of the timestamp in the given offset
pub fn timestamp_to_local_date(timestamp_millis: i64, offset: FixedOffset) -> NaiveDate {
    to_offset(timestamp_millis, offset).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ist() -> FixedOffset {
        utc_offset_from_minutes(330).unwrap()
    }

    #[test]
    fn test_system_clock_returns_increasing_timestamps() {
        // テスト項目: SystemClock が呼び出すたびに増加するタイムスタンプを返す
        // given (前提条件):
        let clock = SystemClock;

        // when (操作):
        let timestamp1 = clock.now_millis();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let timestamp2 = clock.now_millis();

        // then (期待する結果):
        assert!(timestamp1 > 0);
        assert!(timestamp2 >= timestamp1);
    }

    #[test]
    fn test_fixed_clock_returns_fixed_timestamp() {
        // テスト項目: FixedClock が固定されたタイムスタンプを返す
        // given (前提条件):
        let fixed_time = 1234567890123;
        let clock = FixedClock::new(fixed_time);

        // when (操作):
        let timestamp1 = clock.now_millis();
        let timestamp2 = clock.now_millis();

        // then (期待する結果):
        assert_eq!(timestamp1, fixed_time);
        assert_eq!(timestamp2, fixed_time);
    }

    #[test]
    fn test_utc_offset_from_minutes_rejects_out_of_range() {
        // テスト項目: 範囲外のオフセットは None になる
        // given (前提条件):
        let valid = 330;
        let invalid = 24 * 60;

        // when (操作):
        let valid_offset = utc_offset_from_minutes(valid);
        let invalid_offset = utc_offset_from_minutes(invalid);

        // then (期待する結果):
        assert_eq!(valid_offset.map(|o| o.local_minus_utc()), Some(330 * 60));
        assert!(invalid_offset.is_none());
    }

    #[test]
    fn test_timestamp_to_rfc3339_format() {
        // テスト項目: タイムスタンプが指定オフセットの RFC 3339 形式に変換される
        // given (前提条件):
        // 2023-01-01 00:00:00 IST in milliseconds
        let timestamp = 1672511400000;

        // when (操作):
        let result = timestamp_to_rfc3339(timestamp, ist());

        // then (期待する結果):
        assert!(result.starts_with("2023-01-01T00:00:00"));
        assert!(result.ends_with("+05:30"));
    }

    #[test]
    fn test_timestamp_to_locale_date_uses_offset() {
        // テスト項目: UTC では前日でも、オフセット適用後の日付で表示される
        // given (前提条件):
        // 2023-03-04 20:00:00 UTC = 2023-03-05 01:30:00 IST
        let timestamp = 1677960000000;

        // when (操作):
        let utc = timestamp_to_locale_date(timestamp, utc_offset_from_minutes(0).unwrap());
        let local = timestamp_to_locale_date(timestamp, ist());

        // then (期待する結果):
        assert_eq!(utc, "3/4/2023");
        assert_eq!(local, "3/5/2023");
    }

    #[test]
    fn test_timestamp_to_local_date() {
        // テスト項目: オフセット適用後のカレンダー日付が得られる
        // given (前提条件):
        let timestamp = 1677960000000;

        // when (操作):
        let date = timestamp_to_local_date(timestamp, ist());

        // then (期待する結果):
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 3, 5).unwrap());
    }
}
