// src/services/catalog_service.rs

use crate::{
    common::error::AppError,
    db::CatalogRepository,
    models::catalog::{Brand, Category},
};

#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogRepository,
}

impl CatalogService {
    pub fn new(repo: CatalogRepository) -> Self {
        Self { repo }
    }

    // --- Marcas ---

    pub async fn list_brands(&self) -> Result<Vec<Brand>, AppError> {
        self.repo.find_all_brands().await
    }

    pub async fn get_brand(&self, id: i32) -> Result<Brand, AppError> {
        self.repo
            .find_brand_by_id(id)
            .await?
            .ok_or(AppError::NotFound("brand"))
    }

    pub async fn create_brand(&self, brand_name: &str) -> Result<Brand, AppError> {
        self.repo.create_brand(brand_name).await
    }

    pub async fn delete_brand(&self, id: i32) -> Result<(), AppError> {
        self.repo.delete_brand(id).await
    }

    // --- Categorias ---

    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.repo.find_all_categories().await
    }

    pub async fn get_category(&self, id: i32) -> Result<Category, AppError> {
        self.repo
            .find_category_by_id(id)
            .await?
            .ok_or(AppError::NotFound("category"))
    }

    pub async fn create_category(&self, category_name: &str) -> Result<Category, AppError> {
        self.repo.create_category(category_name).await
    }

    pub async fn delete_category(&self, id: i32) -> Result<(), AppError> {
        self.repo.delete_category(id).await
    }
}
