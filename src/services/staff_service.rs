// src/services/staff_service.rs

use crate::{
    common::error::AppError,
    db::{ShowroomRepository, StaffRepository},
    models::staff::{Staff, StaffMetrics, StaffPayload},
};

#[derive(Clone)]
pub struct StaffService {
    repo: StaffRepository,
    showrooms: ShowroomRepository,
}

impl StaffService {
    pub fn new(repo: StaffRepository, showrooms: ShowroomRepository) -> Self {
        Self { repo, showrooms }
    }

    pub async fn list(&self) -> Result<Vec<Staff>, AppError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<Staff, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("staff"))
    }

    pub async fn create(&self, payload: &StaffPayload) -> Result<Staff, AppError> {
        let store_id = self.ensure_refs(payload, None).await?;
        self.repo
            .create(
                &payload.first_name,
                &payload.last_name,
                &payload.email,
                payload.phone.as_deref(),
                payload.active,
                store_id,
                payload.manager_id,
            )
            .await
    }

    pub async fn update(&self, id: i32, payload: &StaffPayload) -> Result<Staff, AppError> {
        let store_id = self.ensure_refs(payload, Some(id)).await?;
        self.repo
            .update(
                id,
                &payload.first_name,
                &payload.last_name,
                &payload.email,
                payload.phone.as_deref(),
                payload.active,
                store_id,
                payload.manager_id,
            )
            .await?
            .ok_or(AppError::NotFound("staff"))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.repo.delete(id).await
    }

    // Regras referenciais do cadastro: a loja e o gerente precisam
    // existir (404) e ninguém pode ser gerente de si mesmo (400).
    async fn ensure_refs(
        &self,
        payload: &StaffPayload,
        own_id: Option<i32>,
    ) -> Result<i32, AppError> {
        // `store_id` passou pelo `required` do validator antes de chegar aqui.
        let store_id = payload
            .store_id
            .ok_or_else(|| AppError::InvalidInput("'store_id' is required".to_string()))?;

        if !self.showrooms.store_exists(store_id).await? {
            return Err(AppError::NotFound("store"));
        }

        if let Some(manager_id) = payload.manager_id {
            if own_id == Some(manager_id) {
                return Err(AppError::InvalidInput(
                    "staff cannot be its own manager".to_string(),
                ));
            }
            if !self.repo.staff_exists(manager_id).await? {
                return Err(AppError::NotFound("manager"));
            }
        }

        Ok(store_id)
    }

    // Relatório consolidado de staff: quatro sub-consultas em paralelo.
    pub async fn metrics(&self) -> Result<StaffMetrics, AppError> {
        let (staff_performance, activity_stats, store_staff_distribution, total_staff) = tokio::try_join!(
            self.repo.performance(),
            self.repo.activity_stats(),
            self.repo.store_distribution(),
            self.repo.count_all(),
        )?;

        Ok(StaffMetrics {
            staff_performance,
            activity_stats,
            store_staff_distribution,
            total_staff,
        })
    }
}
