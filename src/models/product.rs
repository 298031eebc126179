// src/models/product.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

// --- Linha da tabela production.products ---
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub product_name: String,
    pub brand_id: i32,
    pub category_id: i32,
    pub model_year: i16,
    pub list_price: Decimal,
}

// Validação customizada: preço de tabela nunca negativo.
fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.message = Some("'list_price' must be non-negative.".into());
        return Err(err);
    }
    Ok(())
}

// Payload compartilhado por create (POST) e update (PUT) — o update
// é uma substituição completa da linha.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductPayload {
    #[validate(length(min = 1, message = "'product_name' is required."))]
    pub product_name: String,

    #[validate(required(message = "'brand_id' is required."))]
    pub brand_id: Option<i32>,

    #[validate(required(message = "'category_id' is required."))]
    pub category_id: Option<i32>,

    #[validate(required(message = "'model_year' is required."))]
    pub model_year: Option<i16>,

    #[validate(
        required(message = "'list_price' is required."),
        custom(function = "validate_not_negative")
    )]
    pub list_price: Option<Decimal>,
}

// --- Entradas dos relatórios de produto ---
// A receita é sempre `quantity * list_price * (1 - discount)`,
// somada no SQL; nunca uma coluna de total pré-calculada.

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct TopProductEntry {
    pub product_name: String,
    pub total_quantity_sold: i64,
    pub total_revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct BrandRevenueEntry {
    pub brand_name: String,
    pub total_revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct CategoryRevenueEntry {
    pub category_name: String,
    pub total_revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ProductStockEntry {
    pub product_name: String,
    pub stock_quantity: i64,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ModelYearSalesEntry {
    pub model_year: i16,
    pub total_quantity_sold: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_base() -> ProductPayload {
        ProductPayload {
            product_name: "Trek 820 - 2018".to_string(),
            brand_id: Some(1),
            category_id: Some(2),
            model_year: Some(2018),
            list_price: Some(Decimal::new(37_999, 2)),
        }
    }

    #[test]
    fn payload_valido_passa() {
        assert!(payload_base().validate().is_ok());
    }

    #[test]
    fn preco_negativo_e_rejeitado() {
        let mut payload = payload_base();
        payload.list_price = Some(Decimal::new(-1, 0));
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("list_price"));
    }

    #[test]
    fn campos_obrigatorios_ausentes_sao_rejeitados() {
        let mut payload = payload_base();
        payload.brand_id = None;
        payload.product_name = String::new();
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("brand_id"));
        assert!(fields.contains_key("product_name"));
    }
}
