// src/handlers/catalog.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AdminPrincipal,
    models::catalog::{CreateBrandPayload, CreateCategoryPayload},
};

// --- Marcas ---

// GET /api/brands
pub async fn list_brands(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let brands = app_state.catalog_service.list_brands().await?;
    Ok((StatusCode::OK, Json(brands)))
}

// GET /api/brands/{id}
pub async fn get_brand(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let brand = app_state.catalog_service.get_brand(id).await?;
    Ok((StatusCode::OK, Json(brand)))
}

// POST /api/brands
pub async fn create_brand(
    State(app_state): State<AppState>,
    _admin: AdminPrincipal,
    Json(payload): Json<CreateBrandPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let brand = app_state
        .catalog_service
        .create_brand(&payload.brand_name)
        .await?;
    Ok((StatusCode::CREATED, Json(brand)))
}

// DELETE /api/brands/{id}
pub async fn delete_brand(
    State(app_state): State<AppState>,
    _admin: AdminPrincipal,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.delete_brand(id).await?;
    Ok((StatusCode::OK, Json(json!({ "message": "deleted" }))))
}

// --- Categorias ---

// GET /api/categories
pub async fn list_categories(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let categories = app_state.catalog_service.list_categories().await?;
    Ok((StatusCode::OK, Json(categories)))
}

// GET /api/categories/{id}
pub async fn get_category(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category = app_state.catalog_service.get_category(id).await?;
    Ok((StatusCode::OK, Json(category)))
}

// POST /api/categories
pub async fn create_category(
    State(app_state): State<AppState>,
    _admin: AdminPrincipal,
    Json(payload): Json<CreateCategoryPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let category = app_state
        .catalog_service
        .create_category(&payload.category_name)
        .await?;
    Ok((StatusCode::CREATED, Json(category)))
}

// DELETE /api/categories/{id}
pub async fn delete_category(
    State(app_state): State<AppState>,
    _admin: AdminPrincipal,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.delete_category(id).await?;
    Ok((StatusCode::OK, Json(json!({ "message": "deleted" }))))
}
