//! HTTP API endpoint handlers (health, departments, debug).

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    infrastructure::dto::http::{DepartmentDto, RegistryEntryDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Department list for the department-head login dropdown
pub async fn list_departments(State(state): State<Arc<AppState>>) -> Json<Vec<DepartmentDto>> {
    let departments = state.list_departments_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(departments.into_iter().map(DepartmentDto::from).collect())
}

/// Debug endpoint to get the current connection registry (for testing purposes)
pub async fn debug_registry_state(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<RegistryEntryDto>> {
    let entries = state.get_registry_state_usecase.execute().await;
    Json(entries.into_iter().map(RegistryEntryDto::from).collect())
}
