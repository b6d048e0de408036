//! WebSocket message DTOs.
//!
//! Every frame is a JSON text frame carrying a kebab-case `type` tag.

use serde::{Deserialize, Serialize};

/// Message type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    /// server -> client, sent right after the upgrade
    Connected,
    /// client -> server, department head subscribes to its department
    RegisterHod,
    /// server -> client, acknowledges `register-hod`
    Registered,
    /// server -> client, a guest of the department was approved or rejected
    GuestStatusUpdate,
    /// server -> client, the last client message was rejected
    Error,
}

/// Only the tag, used to dispatch before parsing the full message
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub r#type: MessageType,
}

/// Department id as sent by clients: browsers keep it in session storage as
/// a string, other clients send a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDepartmentId {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedMessage {
    pub r#type: MessageType,
    pub connection_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterHodMessage {
    pub r#type: MessageType,
    pub department_id: RawDepartmentId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredMessage {
    pub r#type: MessageType,
    pub department_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestStatusUpdateMessage {
    pub r#type: MessageType,
    pub guest_name: String,
    /// "Approved" or "Rejected"
    pub status: String,
    /// Locale-formatted date of the decision (`M/D/YYYY`)
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    pub r#type: MessageType,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_hod_accepts_number_and_string() {
        // テスト項目: departmentId は数値でも数値文字列でも受け付ける
        // given (前提条件):
        let numeric = r#"{"type":"register-hod","departmentId":7}"#;
        let text = r#"{"type":"register-hod","departmentId":"7"}"#;

        // when (操作):
        let numeric: RegisterHodMessage = serde_json::from_str(numeric).unwrap();
        let text: RegisterHodMessage = serde_json::from_str(text).unwrap();

        // then (期待する結果):
        assert_eq!(numeric.r#type, MessageType::RegisterHod);
        assert_eq!(numeric.department_id, RawDepartmentId::Number(7));
        assert_eq!(text.department_id, RawDepartmentId::Text("7".to_string()));
    }

    #[test]
    fn test_guest_status_update_wire_format() {
        // テスト項目: ステータス変更通知のフィールド名が guestName / status / date になる
        // given (前提条件):
        let msg = GuestStatusUpdateMessage {
            r#type: MessageType::GuestStatusUpdate,
            guest_name: "Ada Lovelace".to_string(),
            status: "Rejected".to_string(),
            date: "1/20/2026".to_string(),
        };

        // when (操作):
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({
                "type": "guest-status-update",
                "guestName": "Ada Lovelace",
                "status": "Rejected",
                "date": "1/20/2026",
            })
        );
    }

    #[test]
    fn test_envelope_ignores_payload_fields() {
        // テスト項目: Envelope は type だけを読み取る
        // given (前提条件):
        let json = r#"{"type":"connected","connectionId":"abc"}"#;

        // when (操作):
        let envelope: Envelope = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(envelope.r#type, MessageType::Connected);
    }
}
