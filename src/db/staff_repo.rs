// src/db/staff_repo.rs

use serde_json::json;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::staff::{Staff, StaffActivityStats, StaffPerformanceEntry, StoreStaffEntry},
};

const STAFF_COLUMNS: &str =
    "staff_id, first_name, last_name, email, phone, active, store_id, manager_id";

#[derive(Clone)]
pub struct StaffRepository {
    pool: PgPool,
}

impl StaffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // --- CRUD ---

    pub async fn find_all(&self) -> Result<Vec<Staff>, AppError> {
        let sql = format!("SELECT {STAFF_COLUMNS} FROM sales.staffs ORDER BY staff_id");
        let staffs = sqlx::query_as::<_, Staff>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(staffs)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Staff>, AppError> {
        let sql = format!("SELECT {STAFF_COLUMNS} FROM sales.staffs WHERE staff_id = $1");
        let staff = sqlx::query_as::<_, Staff>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(staff)
    }

    pub async fn create(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: Option<&str>,
        active: i16,
        store_id: i32,
        manager_id: Option<i32>,
    ) -> Result<Staff, AppError> {
        let sql = format!(
            "INSERT INTO sales.staffs \
                 (first_name, last_name, email, phone, active, store_id, manager_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {STAFF_COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&sql)
            .bind(first_name)
            .bind(last_name)
            .bind(email)
            .bind(phone)
            .bind(active)
            .bind(store_id)
            .bind(manager_id)
            .fetch_one(&self.pool)
            .await
            .map_err(translate_unique_violation)
    }

    pub async fn update(
        &self,
        id: i32,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: Option<&str>,
        active: i16,
        store_id: i32,
        manager_id: Option<i32>,
    ) -> Result<Option<Staff>, AppError> {
        let sql = format!(
            "UPDATE sales.staffs \
             SET first_name = $2, last_name = $3, email = $4, phone = $5, \
                 active = $6, store_id = $7, manager_id = $8 \
             WHERE staff_id = $1 \
             RETURNING {STAFF_COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&sql)
            .bind(id)
            .bind(first_name)
            .bind(last_name)
            .bind(email)
            .bind(phone)
            .bind(active)
            .bind(store_id)
            .bind(manager_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(translate_unique_violation)
    }

    // Exclusão guardada por subordinados e pedidos associados.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let subordinates: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM sales.staffs WHERE manager_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        let orders: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM sales.orders WHERE staff_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if subordinates > 0 || orders > 0 {
            return Err(AppError::Conflict {
                message: "cannot delete staff: dependent rows exist".to_string(),
                dependencies: Some(json!({
                    "subordinates": subordinates,
                    "orders": orders,
                })),
            });
        }

        let affected = sqlx::query("DELETE FROM sales.staffs WHERE staff_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        if affected == 0 {
            return Err(AppError::NotFound("staff"));
        }
        Ok(())
    }

    pub async fn staff_exists(&self, id: i32) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM sales.staffs WHERE staff_id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    // --- Relatório GET /api/staff/metrics/summary ---

    pub async fn performance(&self) -> Result<Vec<StaffPerformanceEntry>, AppError> {
        let entries = sqlx::query_as::<_, StaffPerformanceEntry>(
            "SELECT s.staff_id, s.first_name, s.last_name, st.store_name, \
                    COUNT(DISTINCT o.order_id)::bigint AS total_orders, \
                    COALESCE(SUM(oi.quantity * oi.list_price * (1 - oi.discount)), 0) AS total_revenue \
             FROM sales.staffs s \
             JOIN sales.stores st ON st.store_id = s.store_id \
             LEFT JOIN sales.orders o ON o.staff_id = s.staff_id \
             LEFT JOIN sales.order_items oi ON oi.order_id = o.order_id \
             GROUP BY s.staff_id, s.first_name, s.last_name, st.store_name \
             ORDER BY total_revenue DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    pub async fn activity_stats(&self) -> Result<StaffActivityStats, AppError> {
        let stats = sqlx::query_as::<_, StaffActivityStats>(
            "SELECT COUNT(*) FILTER (WHERE active = 1)::bigint AS active_count, \
                    COUNT(*) FILTER (WHERE active <> 1)::bigint AS inactive_count \
             FROM sales.staffs",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(stats)
    }

    pub async fn store_distribution(&self) -> Result<Vec<StoreStaffEntry>, AppError> {
        let entries = sqlx::query_as::<_, StoreStaffEntry>(
            "SELECT st.store_name, COUNT(s.staff_id)::bigint AS staff_count \
             FROM sales.stores st \
             LEFT JOIN sales.staffs s ON s.store_id = st.store_id \
             GROUP BY st.store_id, st.store_name \
             ORDER BY staff_count DESC, st.store_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    pub async fn count_all(&self) -> Result<i64, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales.staffs")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}

// Converte violação de chave única (e-mail global) em 409 amigável.
fn translate_unique_violation(e: sqlx::Error) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::EmailAlreadyExists;
        }
    }
    AppError::DatabaseError(e)
}
