// src/handlers/staff.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::{
    common::{
        error::AppError,
        response::{normalized_json, StatsError},
    },
    config::AppState,
    middleware::auth::AdminPrincipal,
    models::staff::{StaffMetrics, StaffPayload},
};

// GET /api/staff
pub async fn list_staff(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let staffs = app_state.staff_service.list().await?;
    Ok((StatusCode::OK, Json(staffs)))
}

// GET /api/staff/{id}
pub async fn get_staff(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let staff = app_state.staff_service.get(id).await?;
    Ok((StatusCode::OK, Json(staff)))
}

// POST /api/staff
// E-mail duplicado -> 409; loja/gerente inexistente -> 404.
pub async fn create_staff(
    State(app_state): State<AppState>,
    _admin: AdminPrincipal,
    Json(payload): Json<StaffPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let staff = app_state.staff_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(staff)))
}

// PUT /api/staff/{id}
// Gerente de si mesmo -> 400.
pub async fn update_staff(
    State(app_state): State<AppState>,
    _admin: AdminPrincipal,
    Path(id): Path<i32>,
    Json(payload): Json<StaffPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let staff = app_state.staff_service.update(id, &payload).await?;
    Ok((StatusCode::OK, Json(staff)))
}

// DELETE /api/staff/{id}
pub async fn delete_staff(
    State(app_state): State<AppState>,
    _admin: AdminPrincipal,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.staff_service.delete(id).await?;
    Ok((StatusCode::OK, Json(json!({ "message": "deleted" }))))
}

// GET /api/staff/metrics/summary
// Responde o objeto consolidado direto, sem o envelope { message, data }.
#[utoipa::path(
    get,
    path = "/api/staff/metrics/summary",
    tag = "Staff stats",
    responses(
        (status = 200, description = "Desempenho, atividade e distribuição de staff", body = StaffMetrics),
        (status = 500, description = "Falha interna")
    )
)]
pub async fn staff_metrics(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, StatsError> {
    let data = app_state.staff_service.metrics().await?;
    Ok((StatusCode::OK, Json(normalized_json(&data)?)))
}
