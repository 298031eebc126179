// src/models/showroom.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// Linha da tabela sales.stores. No domínio do painel as lojas
// são apresentadas como "showrooms".
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Showroom {
    pub store_id: i32,
    pub store_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

// Payload de create (POST) e update (PUT). Nome, cidade e estado
// são obrigatórios; o restante do endereço é opcional.
#[derive(Debug, Deserialize, Validate)]
pub struct ShowroomPayload {
    #[validate(length(min = 1, message = "'store_name' is required."))]
    pub store_name: String,

    pub phone: Option<String>,

    #[validate(email(message = "'email' must be a valid e-mail address."))]
    pub email: Option<String>,

    pub street: Option<String>,

    #[validate(length(min = 1, message = "'city' is required."))]
    pub city: String,

    #[validate(length(min = 1, message = "'state' is required."))]
    pub state: String,

    pub zip_code: Option<String>,
}

// --- Sub-agregados do relatório por loja ---
// Três consultas independentes; a junção por store_id acontece no service.

#[derive(Debug, Clone, FromRow)]
pub struct StoreSalesAgg {
    pub store_id: i32,
    pub total_orders: i64,
    pub total_sales: Decimal,
}

#[derive(Debug, Clone, FromRow)]
pub struct StoreStockAgg {
    pub store_id: i32,
    pub total_stock: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct StoreStaffAgg {
    pub store_id: i32,
    pub staff_count: i64,
}

// Registro final por loja; sub-agregados ausentes valem zero.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShowroomMetricsEntry {
    pub store_id: i32,
    pub store_name: String,
    pub total_orders: i64,
    pub total_sales: f64,
    pub total_stock: i64,
    pub staff_count: i64,
}
