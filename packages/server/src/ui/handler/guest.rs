//! Guest record endpoints (`/api/guest/...`).

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::{
    domain::{DepartmentId, GuestDecision, GuestId, ValueObjectError},
    infrastructure::dto::http::{
        GuestDto, GuestMutationResponse, MarkAllReadResponse, RegisterGuestRequest,
        UnreadCountResponse, UpdateStatusRequest,
    },
    ui::{error::ApiError, state::AppState},
    usecase::{NotificationDelivery, RegisterGuestInput},
};

/// Path segment -> GuestId (数値でなければ存在しないゲストとして扱う)
fn parse_guest_id(raw: &str) -> Result<GuestId, ApiError> {
    raw.trim()
        .parse::<u64>()
        .map(GuestId::new)
        .map_err(|_| ApiError::NotFound("Guest not found".to_string()))
}

const INVALID_GUEST_PAYLOAD: &str = "Invalid guest registration payload";

/// 本文が JSON として読めない・型が合わない場合も `{"error"}` 形式の 400 に揃える
fn reject_body(rejection: JsonRejection, message: &str) -> ApiError {
    tracing::debug!("Rejected request body: {}", rejection.body_text());
    ApiError::BadRequest(message.to_string())
}

fn parse_decision(
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<GuestDecision, ApiError> {
    let Json(request) = payload.map_err(|e| reject_body(e, "Invalid status"))?;
    Ok(GuestDecision::try_from(request.status_str())?)
}

/// `POST /api/guest/add`
pub async fn add_guest(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterGuestRequest>, JsonRejection>,
) -> Result<Json<GuestMutationResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| reject_body(e, INVALID_GUEST_PAYLOAD))?;
    let department_id = match request.d_id {
        Some(raw) => DepartmentId::try_from(raw)?,
        None => return Err(ValueObjectError::DepartmentIdRequired.into()),
    };

    let input = RegisterGuestInput {
        guest_name: request.guest_name,
        contact: request.contact,
        visit_purpose: request.visit_purpose,
        visit_date: request.visit_date,
        enter_time: request.enter_time,
        out_time: request.out_time,
    };
    let guest = state
        .register_guest_usecase
        .execute(department_id, input)
        .await?;

    Ok(Json(GuestMutationResponse {
        success: true,
        message: "Guest registered successfully".to_string(),
        guest: GuestDto::from_entity(&guest, state.utc_offset),
    }))
}

/// `GET /api/guest/{g_id}`
///
/// 通知を受けたダッシュボードが正の状態を取り直すためのエンドポイント。
pub async fn get_guest(
    State(state): State<Arc<AppState>>,
    Path(g_id): Path<String>,
) -> Result<Json<GuestDto>, ApiError> {
    let guest_id = parse_guest_id(&g_id)?;
    let guest = state.get_guest_usecase.execute(guest_id).await?;
    Ok(Json(GuestDto::from_entity(&guest, state.utc_offset)))
}

/// `GET /api/guest/byDepartment/{d_id}`
pub async fn list_department_guests(
    State(state): State<Arc<AppState>>,
    Path(d_id): Path<String>,
) -> Result<Json<Vec<GuestDto>>, ApiError> {
    let department_id = DepartmentId::try_from(d_id.as_str())
        .map_err(|_| ApiError::BadRequest("Invalid Department ID".to_string()))?;
    let guests = state
        .list_department_guests_usecase
        .execute(department_id)
        .await;

    Ok(Json(
        guests
            .iter()
            .map(|guest| GuestDto::from_entity(guest, state.utc_offset))
            .collect(),
    ))
}

/// `PUT /api/guest/updateStatus/{g_id}`
///
/// ステータス値の検証はゲストの検索より先に行う。本文が無い・読めない場合も
/// 不正なステータスとして扱う。
/// 学科長への通知の成否はレスポンスに影響しない。
pub async fn update_guest_status(
    State(state): State<Arc<AppState>>,
    Path(g_id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<GuestMutationResponse>, ApiError> {
    let decision = parse_decision(payload)?;
    let guest_id = parse_guest_id(&g_id)?;

    let change = state
        .update_guest_status_usecase
        .execute(guest_id, decision)
        .await?;

    if let NotificationDelivery::Pushed(connection_id) = &change.delivery {
        tracing::debug!(
            "Guest {} decision relayed to connection '{}'",
            guest_id,
            connection_id
        );
    }

    let status = change.guest.status.as_str();
    Ok(Json(GuestMutationResponse {
        success: true,
        message: format!("Guest {} successfully", status.to_lowercase()),
        guest: GuestDto::from_entity(&change.guest, state.utc_offset),
    }))
}

/// `GET /api/guest/unreadCount`
pub async fn get_unread_count(State(state): State<Arc<AppState>>) -> Json<UnreadCountResponse> {
    let unread_count = state.count_unread_guests_usecase.execute().await;
    Json(UnreadCountResponse {
        success: true,
        unread_count,
    })
}

/// `PUT /api/guest/markAllRead`
pub async fn mark_all_read(State(state): State<Arc<AppState>>) -> Json<MarkAllReadResponse> {
    let marked = state.mark_all_guests_read_usecase.execute().await;
    Json(MarkAllReadResponse {
        success: true,
        message: "All pending guests marked as read".to_string(),
        marked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_guest_id() {
        // テスト項目: 数値でないゲスト ID は 404 として扱う
        // given (前提条件):
        let valid = "12";
        let invalid = "abc";

        // when (操作):
        let valid = parse_guest_id(valid);
        let invalid = parse_guest_id(invalid);

        // then (期待する結果):
        assert_eq!(valid, Ok(GuestId::new(12)));
        assert_eq!(
            invalid,
            Err(ApiError::NotFound("Guest not found".to_string()))
        );
    }

    #[test]
    fn test_parse_decision_rejects_non_string_status() {
        // テスト項目: 文字列以外・欠落したステータスは 400 "Invalid status"
        // given (前提条件):
        let bodies = [
            serde_json::json!({ "status": 5 }),
            serde_json::json!({ "status": null }),
            serde_json::json!({}),
        ];

        // when (操作):
        let results: Vec<_> = bodies
            .into_iter()
            .map(|body| {
                let request: UpdateStatusRequest = serde_json::from_value(body).unwrap();
                parse_decision(Ok(Json(request)))
            })
            .collect();

        // then (期待する結果):
        for result in results {
            assert_eq!(
                result,
                Err(ApiError::BadRequest("Invalid status".to_string()))
            );
        }
    }

    #[test]
    fn test_parse_decision_accepts_known_status() {
        // テスト項目: "Approved" / "Rejected" は受け付ける
        // given (前提条件):
        let request: UpdateStatusRequest =
            serde_json::from_value(serde_json::json!({ "status": "Rejected" })).unwrap();

        // when (操作):
        let result = parse_decision(Ok(Json(request)));

        // then (期待する結果):
        assert_eq!(result, Ok(GuestDecision::Rejected));
    }
}
