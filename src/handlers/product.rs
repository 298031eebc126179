// src/handlers/product.rs

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
        response::{StatsError, StatsReply},
    },
    config::AppState,
    middleware::auth::AdminPrincipal,
    models::product::{
        BrandRevenueEntry, CategoryRevenueEntry, ModelYearSalesEntry, ProductPayload,
        ProductStockEntry, TopProductEntry,
    },
};

// N do ranking: parâmetro de rota opcional, 5 quando ausente ou não numérico.
fn parse_top_n(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(5)
}

// --- Relatórios (envelope { message, data }) ---

// GET /api/product/stats/top/{n}
#[utoipa::path(
    get,
    path = "/api/product/stats/top/{n}",
    tag = "Product stats",
    params(
        ("n" = String, Path, description = "Tamanho do ranking (default 5)")
    ),
    responses(
        (status = 200, description = "Top-N produtos por quantidade vendida (DENSE_RANK)", body = Vec<TopProductEntry>),
        (status = 500, description = "Falha interna")
    )
)]
pub async fn top_products(
    State(app_state): State<AppState>,
    Path(n): Path<String>,
) -> Result<impl IntoResponse, StatsError> {
    let limit = parse_top_n(Some(&n));
    let data = app_state.product_service.top_products(limit).await?;
    Ok((StatusCode::OK, Json(StatsReply::success(&data)?)))
}

// GET /api/product/stats/top
#[utoipa::path(
    get,
    path = "/api/product/stats/top",
    tag = "Product stats",
    responses(
        (status = 200, description = "Top-5 produtos por quantidade vendida", body = Vec<TopProductEntry>)
    )
)]
pub async fn top_products_default(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, StatsError> {
    let data = app_state
        .product_service
        .top_products(parse_top_n(None))
        .await?;
    Ok((StatusCode::OK, Json(StatsReply::success(&data)?)))
}

// GET /api/product/stats/revenue
#[utoipa::path(
    get,
    path = "/api/product/stats/revenue",
    tag = "Product stats",
    responses(
        (status = 200, description = "Receita por marca, decrescente", body = Vec<BrandRevenueEntry>)
    )
)]
pub async fn revenue_by_brand(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, StatsError> {
    let data = app_state.product_service.revenue_by_brand().await?;
    Ok((StatusCode::OK, Json(StatsReply::success(&data)?)))
}

// GET /api/product/stats/categoryrevenue
#[utoipa::path(
    get,
    path = "/api/product/stats/categoryrevenue",
    tag = "Product stats",
    responses(
        (status = 200, description = "Receita por categoria, decrescente", body = Vec<CategoryRevenueEntry>)
    )
)]
pub async fn revenue_by_category(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, StatsError> {
    let data = app_state.product_service.revenue_by_category().await?;
    Ok((StatusCode::OK, Json(StatsReply::success(&data)?)))
}

// GET /api/product/stats/inventory
#[utoipa::path(
    get,
    path = "/api/product/stats/inventory",
    tag = "Product stats",
    responses(
        (status = 200, description = "Estoque somado por produto", body = Vec<ProductStockEntry>)
    )
)]
pub async fn inventory_snapshot(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, StatsError> {
    let data = app_state.product_service.inventory_snapshot().await?;
    Ok((StatusCode::OK, Json(StatsReply::success(&data)?)))
}

// GET /api/product/stats/saleperyear
#[utoipa::path(
    get,
    path = "/api/product/stats/saleperyear",
    tag = "Product stats",
    responses(
        (status = 200, description = "Unidades vendidas por ano de modelo", body = Vec<ModelYearSalesEntry>)
    )
)]
pub async fn units_by_model_year(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, StatsError> {
    let data = app_state.product_service.units_by_model_year().await?;
    Ok((StatusCode::OK, Json(StatsReply::success(&data)?)))
}

// --- CRUD (envelope { error } nas falhas) ---

// GET /api/product/action/products
pub async fn list_products(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state.product_service.list().await?;
    Ok((StatusCode::OK, Json(products)))
}

// GET /api/product/action/products/{id}
pub async fn get_product(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let product = app_state.product_service.get(id).await?;
    Ok((StatusCode::OK, Json(product)))
}

// POST /api/product/action/products
pub async fn create_product(
    State(app_state): State<AppState>,
    _admin: AdminPrincipal,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // Os `required` do validator garantem os unwraps abaixo.
    let product = app_state
        .product_service
        .create(
            &payload.product_name,
            payload.brand_id.unwrap(),
            payload.category_id.unwrap(),
            payload.model_year.unwrap(),
            payload.list_price.unwrap(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

// PUT /api/product/action/products/{id}
pub async fn update_product(
    State(app_state): State<AppState>,
    _admin: AdminPrincipal,
    Path(id): Path<i32>,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let product = app_state
        .product_service
        .update(
            id,
            &payload.product_name,
            payload.brand_id.unwrap(),
            payload.category_id.unwrap(),
            payload.model_year.unwrap(),
            payload.list_price.unwrap(),
        )
        .await?;

    Ok((StatusCode::OK, Json(product)))
}

// DELETE /api/product/action/products/{id}
pub async fn delete_product(
    State(app_state): State<AppState>,
    _admin: AdminPrincipal,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.product_service.delete(id).await?;
    Ok((StatusCode::OK, Json(json!({ "message": "deleted" }))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn n_ausente_ou_nao_numerico_vira_5() {
        assert_eq!(parse_top_n(None), 5);
        assert_eq!(parse_top_n(Some("abc")), 5);
        assert_eq!(parse_top_n(Some("")), 5);
        assert_eq!(parse_top_n(Some("3.5")), 5);
    }

    #[test]
    fn n_numerico_e_usado_como_esta() {
        assert_eq!(parse_top_n(Some("7")), 7);
        assert_eq!(parse_top_n(Some(" 10 ")), 10);
        assert_eq!(parse_top_n(Some("1")), 1);
    }
}
