// src/handlers/showroom.rs

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
    models::showroom::{ShowroomMetricsEntry, ShowroomPayload},
};

// GET /api/showroom
pub async fn list_showrooms(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let showrooms = app_state.showroom_service.list().await?;
    Ok((StatusCode::OK, Json(showrooms)))
}

// GET /api/showroom/{id}
pub async fn get_showroom(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let showroom = app_state.showroom_service.get(id).await?;
    Ok((StatusCode::OK, Json(showroom)))
}

// POST /api/showroom
pub async fn create_showroom(
    State(app_state): State<AppState>,
    _admin: AdminPrincipal,
    Json(payload): Json<ShowroomPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let showroom = app_state.showroom_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(showroom)))
}

// PUT /api/showroom/{id}
pub async fn update_showroom(
    State(app_state): State<AppState>,
    _admin: AdminPrincipal,
    Path(id): Path<i32>,
    Json(payload): Json<ShowroomPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let showroom = app_state.showroom_service.update(id, &payload).await?;
    Ok((StatusCode::OK, Json(showroom)))
}

// DELETE /api/showroom/{id}
// Em conflito, o 409 traz a contagem de pedidos/staff/estoque dependentes.
pub async fn delete_showroom(
    State(app_state): State<AppState>,
    _admin: AdminPrincipal,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.showroom_service.delete(id).await?;
    Ok((StatusCode::OK, Json(json!({ "message": "deleted" }))))
}

// GET /api/showroom/metrics/summary
// Responde o array por loja direto, sem o envelope { message, data }.
#[utoipa::path(
    get,
    path = "/api/showroom/metrics/summary",
    tag = "Showroom stats",
    responses(
        (status = 200, description = "Métricas por loja (vendas, estoque e staff)", body = Vec<ShowroomMetricsEntry>),
        (status = 500, description = "Falha interna")
    )
)]
pub async fn showroom_metrics(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, StatsError> {
    let data = app_state.showroom_service.metrics().await?;
    Ok((StatusCode::OK, Json(normalized_json(&data)?)))
}
