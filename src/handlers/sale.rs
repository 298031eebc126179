// src/handlers/sale.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::response::{normalized_json, StatsError, StatsReply},
    config::AppState,
    models::sale::{MonthlyRevenueEntry, SalesMetrics, TurnoverEntry},
};

// GET /api/sale/stats/revenuepermonth
#[utoipa::path(
    get,
    path = "/api/sale/stats/revenuepermonth",
    tag = "Sale stats",
    responses(
        (status = 200, description = "Receita mensal em ordem cronológica (mês 'YYYY-MM')", body = Vec<MonthlyRevenueEntry>),
        (status = 500, description = "Falha interna")
    )
)]
pub async fn revenue_per_month(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, StatsError> {
    let data = app_state.sale_service.revenue_per_month().await?;
    Ok((StatusCode::OK, Json(StatsReply::success(&data)?)))
}

// GET /api/sale/stats/turnover
#[utoipa::path(
    get,
    path = "/api/sale/stats/turnover",
    tag = "Sale stats",
    responses(
        (status = 200, description = "Giro de estoque por produto (NULL com estoque zero)", body = Vec<TurnoverEntry>)
    )
)]
pub async fn turnover(State(app_state): State<AppState>) -> Result<impl IntoResponse, StatsError> {
    let data = app_state.sale_service.turnover().await?;
    Ok((StatusCode::OK, Json(StatsReply::success(&data)?)))
}

// GET /api/sale/metrics
// Diferente dos /stats, este endpoint devolve o objeto consolidado
// direto (sem o envelope { message, data }), como o painel espera.
#[utoipa::path(
    get,
    path = "/api/sale/metrics",
    tag = "Sale stats",
    responses(
        (status = 200, description = "Painel consolidado de vendas", body = SalesMetrics)
    )
)]
pub async fn sales_metrics(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, StatsError> {
    let metrics = app_state.sale_service.sales_metrics().await?;
    Ok((StatusCode::OK, Json(normalized_json(&metrics)?)))
}
