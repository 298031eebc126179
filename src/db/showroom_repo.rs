// src/db/showroom_repo.rs

use serde_json::json;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::showroom::{Showroom, StoreSalesAgg, StoreStaffAgg, StoreStockAgg},
};

const SHOWROOM_COLUMNS: &str =
    "store_id, store_name, phone, email, street, city, state, zip_code";

#[derive(Clone)]
pub struct ShowroomRepository {
    pool: PgPool,
}

impl ShowroomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // --- CRUD ---

    pub async fn find_all(&self) -> Result<Vec<Showroom>, AppError> {
        let sql = format!("SELECT {SHOWROOM_COLUMNS} FROM sales.stores ORDER BY store_id");
        let showrooms = sqlx::query_as::<_, Showroom>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(showrooms)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Showroom>, AppError> {
        let sql = format!("SELECT {SHOWROOM_COLUMNS} FROM sales.stores WHERE store_id = $1");
        let showroom = sqlx::query_as::<_, Showroom>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(showroom)
    }

    pub async fn create(
        &self,
        store_name: &str,
        phone: Option<&str>,
        email: Option<&str>,
        street: Option<&str>,
        city: &str,
        state: &str,
        zip_code: Option<&str>,
    ) -> Result<Showroom, AppError> {
        let sql = format!(
            "INSERT INTO sales.stores (store_name, phone, email, street, city, state, zip_code) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {SHOWROOM_COLUMNS}"
        );
        let showroom = sqlx::query_as::<_, Showroom>(&sql)
            .bind(store_name)
            .bind(phone)
            .bind(email)
            .bind(street)
            .bind(city)
            .bind(state)
            .bind(zip_code)
            .fetch_one(&self.pool)
            .await?;
        Ok(showroom)
    }

    pub async fn update(
        &self,
        id: i32,
        store_name: &str,
        phone: Option<&str>,
        email: Option<&str>,
        street: Option<&str>,
        city: &str,
        state: &str,
        zip_code: Option<&str>,
    ) -> Result<Option<Showroom>, AppError> {
        let sql = format!(
            "UPDATE sales.stores \
             SET store_name = $2, phone = $3, email = $4, street = $5, \
                 city = $6, state = $7, zip_code = $8 \
             WHERE store_id = $1 \
             RETURNING {SHOWROOM_COLUMNS}"
        );
        let showroom = sqlx::query_as::<_, Showroom>(&sql)
            .bind(id)
            .bind(store_name)
            .bind(phone)
            .bind(email)
            .bind(street)
            .bind(city)
            .bind(state)
            .bind(zip_code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(showroom)
    }

    // Exclusão guardada por pedidos, staff e estoque; o 409 devolve a
    // contagem de cada dependência.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let orders: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM sales.orders WHERE store_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        let staffs: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM sales.staffs WHERE store_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        let stocks: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM production.stocks WHERE store_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if orders > 0 || staffs > 0 || stocks > 0 {
            return Err(AppError::Conflict {
                message: "cannot delete showroom: dependent rows exist".to_string(),
                dependencies: Some(json!({
                    "orders": orders,
                    "staffs": staffs,
                    "stocks": stocks,
                })),
            });
        }

        let affected = sqlx::query("DELETE FROM sales.stores WHERE store_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        if affected == 0 {
            return Err(AppError::NotFound("showroom"));
        }
        Ok(())
    }

    pub async fn store_exists(&self, id: i32) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM sales.stores WHERE store_id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    // --- Sub-agregados do relatório por loja ---
    // Três consultas independentes; quem junta por store_id é o service.

    pub async fn sales_agg(&self) -> Result<Vec<StoreSalesAgg>, AppError> {
        let rows = sqlx::query_as::<_, StoreSalesAgg>(
            "SELECT o.store_id, \
                    COUNT(DISTINCT o.order_id)::bigint AS total_orders, \
                    COALESCE(SUM(oi.quantity * oi.list_price * (1 - oi.discount)), 0) AS total_sales \
             FROM sales.orders o \
             LEFT JOIN sales.order_items oi ON oi.order_id = o.order_id \
             GROUP BY o.store_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn stock_agg(&self) -> Result<Vec<StoreStockAgg>, AppError> {
        let rows = sqlx::query_as::<_, StoreStockAgg>(
            "SELECT store_id, COALESCE(SUM(quantity), 0)::bigint AS total_stock \
             FROM production.stocks \
             GROUP BY store_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn staff_agg(&self) -> Result<Vec<StoreStaffAgg>, AppError> {
        let rows = sqlx::query_as::<_, StoreStaffAgg>(
            "SELECT store_id, COUNT(*)::bigint AS staff_count \
             FROM sales.staffs \
             GROUP BY store_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
