// src/db/catalog_repo.rs

use serde_json::json;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::catalog::{Brand, Category},
};

// Repositório das tabelas de referência do catálogo
// (production.brands e production.categories).
#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // --- Marcas ---

    pub async fn find_all_brands(&self) -> Result<Vec<Brand>, AppError> {
        let brands = sqlx::query_as::<_, Brand>(
            "SELECT brand_id, brand_name FROM production.brands ORDER BY brand_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(brands)
    }

    pub async fn find_brand_by_id(&self, id: i32) -> Result<Option<Brand>, AppError> {
        let brand = sqlx::query_as::<_, Brand>(
            "SELECT brand_id, brand_name FROM production.brands WHERE brand_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(brand)
    }

    pub async fn create_brand(&self, brand_name: &str) -> Result<Brand, AppError> {
        let brand = sqlx::query_as::<_, Brand>(
            "INSERT INTO production.brands (brand_name) VALUES ($1) \
             RETURNING brand_id, brand_name",
        )
        .bind(brand_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(brand)
    }

    // Exclusão guardada: a checagem de dependentes e o DELETE rodam na
    // mesma transação, fechando a janela entre checar e excluir.
    pub async fn delete_brand(&self, id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let dependents: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM production.products WHERE brand_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if dependents > 0 {
            // O rollback acontece no drop da transação.
            return Err(AppError::Conflict {
                message: "cannot delete brand: products still reference it".to_string(),
                dependencies: Some(json!({ "products": dependents })),
            });
        }

        let affected = sqlx::query("DELETE FROM production.brands WHERE brand_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        if affected == 0 {
            return Err(AppError::NotFound("brand"));
        }
        Ok(())
    }

    // --- Categorias ---

    pub async fn find_all_categories(&self) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT category_id, category_name FROM production.categories ORDER BY category_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    pub async fn find_category_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT category_id, category_name FROM production.categories WHERE category_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(category)
    }

    pub async fn create_category(&self, category_name: &str) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO production.categories (category_name) VALUES ($1) \
             RETURNING category_id, category_name",
        )
        .bind(category_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(category)
    }

    pub async fn delete_category(&self, id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let dependents: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM production.products WHERE category_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if dependents > 0 {
            return Err(AppError::Conflict {
                message: "cannot delete category: products still reference it".to_string(),
                dependencies: Some(json!({ "products": dependents })),
            });
        }

        let affected = sqlx::query("DELETE FROM production.categories WHERE category_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        if affected == 0 {
            return Err(AppError::NotFound("category"));
        }
        Ok(())
    }

    // Usado pelas validações de FK do cadastro de produtos.
    pub async fn brand_exists(&self, id: i32) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM production.brands WHERE brand_id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    pub async fn category_exists(&self, id: i32) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM production.categories WHERE category_id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}
