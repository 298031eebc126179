// src/models/catalog.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// Dados de referência do catálogo: marcas e categorias.
// As colunas seguem o schema `production` do banco.

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Brand {
    pub brand_id: i32,
    pub brand_name: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub category_id: i32,
    pub category_name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBrandPayload {
    #[validate(length(min = 1, message = "'brand_name' is required."))]
    pub brand_name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryPayload {
    #[validate(length(min = 1, message = "'category_name' is required."))]
    pub category_name: String,
}
