// src/services/product_service.rs

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::{CatalogRepository, ProductRepository},
    models::product::{
        BrandRevenueEntry, CategoryRevenueEntry, ModelYearSalesEntry, Product, ProductStockEntry,
        TopProductEntry,
    },
};

#[derive(Clone)]
pub struct ProductService {
    repo: ProductRepository,
    catalog: CatalogRepository,
}

impl ProductService {
    pub fn new(repo: ProductRepository, catalog: CatalogRepository) -> Self {
        Self { repo, catalog }
    }

    // --- CRUD ---

    pub async fn list(&self) -> Result<Vec<Product>, AppError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<Product, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("product"))
    }

    // FKs de catálogo inexistentes são erro de entrada (400), checadas
    // antes do INSERT.
    pub async fn create(
        &self,
        product_name: &str,
        brand_id: i32,
        category_id: i32,
        model_year: i16,
        list_price: Decimal,
    ) -> Result<Product, AppError> {
        self.ensure_catalog_refs(brand_id, category_id).await?;
        self.repo
            .create(product_name, brand_id, category_id, model_year, list_price)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        product_name: &str,
        brand_id: i32,
        category_id: i32,
        model_year: i16,
        list_price: Decimal,
    ) -> Result<Product, AppError> {
        self.ensure_catalog_refs(brand_id, category_id).await?;
        self.repo
            .update(id, product_name, brand_id, category_id, model_year, list_price)
            .await?
            .ok_or(AppError::NotFound("product"))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.repo.delete(id).await
    }

    async fn ensure_catalog_refs(&self, brand_id: i32, category_id: i32) -> Result<(), AppError> {
        if !self.catalog.brand_exists(brand_id).await? {
            return Err(AppError::InvalidInput(
                "'brand_id' does not reference an existing brand".to_string(),
            ));
        }
        if !self.catalog.category_exists(category_id).await? {
            return Err(AppError::InvalidInput(
                "'category_id' does not reference an existing category".to_string(),
            ));
        }
        Ok(())
    }

    // --- Relatórios de produto ---

    pub async fn top_products(&self, limit: i64) -> Result<Vec<TopProductEntry>, AppError> {
        self.repo.top_products(limit).await
    }

    pub async fn revenue_by_brand(&self) -> Result<Vec<BrandRevenueEntry>, AppError> {
        self.repo.revenue_by_brand().await
    }

    pub async fn revenue_by_category(&self) -> Result<Vec<CategoryRevenueEntry>, AppError> {
        self.repo.revenue_by_category().await
    }

    pub async fn inventory_snapshot(&self) -> Result<Vec<ProductStockEntry>, AppError> {
        self.repo.inventory_snapshot().await
    }

    pub async fn units_by_model_year(&self) -> Result<Vec<ModelYearSalesEntry>, AppError> {
        self.repo.units_by_model_year().await
    }
}
