//! HTTP API request/response DTOs.
//!
//! Field names follow the camelCase document schema the dashboards use
//! (`gId`, `dId`, `guestName`, ...).

use serde::{Deserialize, Serialize};

use super::websocket::RawDepartmentId;

/// Guest record as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestDto {
    pub g_id: u64,
    pub d_id: u32,
    pub guest_name: String,
    pub contact: String,
    pub visit_purpose: String,
    /// `YYYY-MM-DD`
    pub visit_date: String,
    pub enter_time: String,
    pub out_time: Option<String>,
    pub status: String,
    pub is_read: bool,
    /// RFC 3339
    pub created_at: String,
    /// RFC 3339
    pub updated_at: String,
}

/// `POST /api/guest/add`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterGuestRequest {
    pub d_id: Option<RawDepartmentId>,
    pub guest_name: Option<String>,
    pub contact: Option<String>,
    pub visit_purpose: Option<String>,
    pub visit_date: Option<String>,
    pub enter_time: Option<String>,
    pub out_time: Option<String>,
}

/// `PUT /api/guest/updateStatus/{gId}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// 文字列以外 (数値など) も受け取り、ハンドラで不正なステータスとして扱う
    pub status: Option<serde_json::Value>,
}

impl UpdateStatusRequest {
    pub fn status_str(&self) -> &str {
        self.status
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
    }
}

/// Response of guest mutations (add, updateStatus)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestMutationResponse {
    pub success: bool,
    pub message: String,
    pub guest: GuestDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCountResponse {
    pub success: bool,
    pub unread_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAllReadResponse {
    pub success: bool,
    pub message: String,
    pub marked: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub dept_id: u32,
    pub dept_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntryDto {
    pub department_id: u32,
    pub connection_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
