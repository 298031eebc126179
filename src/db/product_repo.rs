// src/db/product_repo.rs

use rust_decimal::Decimal;
use serde_json::json;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::product::{
        BrandRevenueEntry, CategoryRevenueEntry, ModelYearSalesEntry, Product, ProductStockEntry,
        TopProductEntry,
    },
};

// A receita é sempre derivada item a item; nunca lemos um total armazenado.
const REVENUE_EXPR: &str = "oi.quantity * oi.list_price * (1 - oi.discount)";

#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // --- CRUD ---

    pub async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT product_id, product_name, brand_id, category_id, model_year, list_price \
             FROM production.products ORDER BY product_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT product_id, product_name, brand_id, category_id, model_year, list_price \
             FROM production.products WHERE product_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    pub async fn create(
        &self,
        product_name: &str,
        brand_id: i32,
        category_id: i32,
        model_year: i16,
        list_price: Decimal,
    ) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO production.products \
                 (product_name, brand_id, category_id, model_year, list_price) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING product_id, product_name, brand_id, category_id, model_year, list_price",
        )
        .bind(product_name)
        .bind(brand_id)
        .bind(category_id)
        .bind(model_year)
        .bind(list_price)
        .fetch_one(&self.pool)
        .await?;
        Ok(product)
    }

    pub async fn update(
        &self,
        id: i32,
        product_name: &str,
        brand_id: i32,
        category_id: i32,
        model_year: i16,
        list_price: Decimal,
    ) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE production.products \
             SET product_name = $2, brand_id = $3, category_id = $4, \
                 model_year = $5, list_price = $6 \
             WHERE product_id = $1 \
             RETURNING product_id, product_name, brand_id, category_id, model_year, list_price",
        )
        .bind(id)
        .bind(product_name)
        .bind(brand_id)
        .bind(category_id)
        .bind(model_year)
        .bind(list_price)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    // Exclusão guardada por itens de pedido e estoque, na mesma transação.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let order_items: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM sales.order_items WHERE product_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        let stocks: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM production.stocks WHERE product_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if order_items > 0 || stocks > 0 {
            return Err(AppError::Conflict {
                message: "cannot delete product: dependent rows exist".to_string(),
                dependencies: Some(json!({ "order_items": order_items, "stocks": stocks })),
            });
        }

        let affected = sqlx::query("DELETE FROM production.products WHERE product_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        if affected == 0 {
            return Err(AppError::NotFound("product"));
        }
        Ok(())
    }

    // --- Relatórios ---

    // Top-N por quantidade vendida. DENSE_RANK: empates compartilham a
    // posição e ambos entram quando rank <= N.
    pub async fn top_products(&self, limit: i64) -> Result<Vec<TopProductEntry>, AppError> {
        let sql = format!(
            "SELECT product_name, total_quantity_sold, total_revenue \
             FROM ( \
                 SELECT p.product_name, \
                        SUM(oi.quantity)::bigint AS total_quantity_sold, \
                        SUM({REVENUE_EXPR}) AS total_revenue, \
                        DENSE_RANK() OVER (ORDER BY SUM(oi.quantity) DESC) AS sales_rank \
                 FROM sales.order_items oi \
                 JOIN production.products p ON p.product_id = oi.product_id \
                 GROUP BY p.product_id, p.product_name \
             ) ranked \
             WHERE sales_rank <= $1 \
             ORDER BY total_quantity_sold DESC, product_name"
        );
        let entries = sqlx::query_as::<_, TopProductEntry>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(entries)
    }

    pub async fn revenue_by_brand(&self) -> Result<Vec<BrandRevenueEntry>, AppError> {
        let sql = format!(
            "SELECT b.brand_name, SUM({REVENUE_EXPR}) AS total_revenue \
             FROM sales.order_items oi \
             JOIN production.products p ON p.product_id = oi.product_id \
             JOIN production.brands b ON b.brand_id = p.brand_id \
             GROUP BY b.brand_id, b.brand_name \
             ORDER BY total_revenue DESC"
        );
        let entries = sqlx::query_as::<_, BrandRevenueEntry>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(entries)
    }

    pub async fn revenue_by_category(&self) -> Result<Vec<CategoryRevenueEntry>, AppError> {
        let sql = format!(
            "SELECT c.category_name, SUM({REVENUE_EXPR}) AS total_revenue \
             FROM sales.order_items oi \
             JOIN production.products p ON p.product_id = oi.product_id \
             JOIN production.categories c ON c.category_id = p.category_id \
             GROUP BY c.category_id, c.category_name \
             ORDER BY total_revenue DESC"
        );
        let entries = sqlx::query_as::<_, CategoryRevenueEntry>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(entries)
    }

    // Fotografia do estoque: soma por produto em todas as lojas.
    pub async fn inventory_snapshot(&self) -> Result<Vec<ProductStockEntry>, AppError> {
        let entries = sqlx::query_as::<_, ProductStockEntry>(
            "SELECT p.product_name, COALESCE(SUM(s.quantity), 0)::bigint AS stock_quantity \
             FROM production.products p \
             LEFT JOIN production.stocks s ON s.product_id = p.product_id \
             GROUP BY p.product_id, p.product_name \
             ORDER BY stock_quantity DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    pub async fn units_by_model_year(&self) -> Result<Vec<ModelYearSalesEntry>, AppError> {
        let entries = sqlx::query_as::<_, ModelYearSalesEntry>(
            "SELECT p.model_year, SUM(oi.quantity)::bigint AS total_quantity_sold \
             FROM sales.order_items oi \
             JOIN production.products p ON p.product_id = oi.product_id \
             GROUP BY p.model_year \
             ORDER BY p.model_year DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }
}
