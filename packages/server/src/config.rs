//! Server configuration.
//!
//! The binary parses command-line flags and environment variables with
//! `clap`; this module validates them into a [`ServerConfig`].

use chrono::FixedOffset;
use thiserror::Error;

use campus_entry_shared::time::utc_offset_from_minutes;

use crate::domain::{Department, DepartmentId};

/// Default campus offset (IST, UTC+05:30)
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("UTC offset of {0} minutes is out of range")]
    InvalidUtcOffset(i32),

    #[error("Invalid department '{0}', expected ID=NAME")]
    InvalidDepartment(String),

    #[error("Department {0} is configured more than once")]
    DuplicateDepartment(DepartmentId),
}

/// Validated server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Offset used for "today" and for every rendered date
    pub utc_offset: FixedOffset,
    /// Department list served by `/api/departments`
    pub departments: Vec<Department>,
}

impl ServerConfig {
    pub fn new(
        host: String,
        port: u16,
        utc_offset_minutes: i32,
        department_definitions: &[String],
    ) -> Result<Self, ConfigError> {
        let utc_offset = utc_offset_from_minutes(utc_offset_minutes)
            .ok_or(ConfigError::InvalidUtcOffset(utc_offset_minutes))?;

        let mut departments: Vec<Department> = Vec::with_capacity(department_definitions.len());
        for definition in department_definitions {
            let department = parse_department(definition)?;
            if departments.iter().any(|d| d.id == department.id) {
                return Err(ConfigError::DuplicateDepartment(department.id));
            }
            departments.push(department);
        }

        Ok(Self {
            host,
            port,
            utc_offset,
            departments,
        })
    }
}

/// `ID=NAME` 形式の学科定義を読む
pub fn parse_department(definition: &str) -> Result<Department, ConfigError> {
    let invalid = || ConfigError::InvalidDepartment(definition.to_string());

    let (id, name) = definition.split_once('=').ok_or_else(invalid)?;
    let id = DepartmentId::try_from(id).map_err(|_| invalid())?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }
    Ok(Department::new(id, name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_department() {
        // テスト項目: ID=NAME 形式の学科定義を読める
        // given (前提条件):
        let definition = "7= Computer Science ";

        // when (操作):
        let department = parse_department(definition).unwrap();

        // then (期待する結果):
        assert_eq!(department.id, DepartmentId::new(7).unwrap());
        assert_eq!(department.name, "Computer Science");
    }

    #[test]
    fn test_parse_department_rejects_malformed() {
        // テスト項目: 形式が不正な学科定義はエラー
        // given (前提条件):
        let definitions = ["Physics", "0=Physics", "x=Physics", "8="];

        // when (操作):
        let results: Vec<_> = definitions.iter().map(|s| parse_department(s)).collect();

        // then (期待する結果):
        for (definition, result) in definitions.iter().zip(results) {
            assert_eq!(result, Err(ConfigError::InvalidDepartment(definition.to_string())));
        }
    }

    #[test]
    fn test_server_config_validation() {
        // テスト項目: オフセットの範囲外と学科 ID の重複は設定エラー
        // given (前提条件):
        let duplicated = vec!["7=CS".to_string(), "7=Physics".to_string()];

        // when (操作):
        let bad_offset = ServerConfig::new("127.0.0.1".to_string(), 3000, 24 * 60, &[]);
        let duplicate = ServerConfig::new("127.0.0.1".to_string(), 3000, 330, &duplicated);
        let ok = ServerConfig::new("127.0.0.1".to_string(), 3000, 330, &duplicated[..1]);

        // then (期待する結果):
        assert_eq!(
            bad_offset.unwrap_err(),
            ConfigError::InvalidUtcOffset(24 * 60)
        );
        assert_eq!(
            duplicate.unwrap_err(),
            ConfigError::DuplicateDepartment(DepartmentId::new(7).unwrap())
        );
        let ok = ok.unwrap();
        assert_eq!(ok.departments.len(), 1);
        assert_eq!(ok.utc_offset.local_minus_utc(), 330 * 60);
    }
}
