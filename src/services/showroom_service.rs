// src/services/showroom_service.rs

use std::collections::HashMap;

use crate::{
    common::{error::AppError, numeric},
    db::ShowroomRepository,
    models::showroom::{
        Showroom, ShowroomMetricsEntry, ShowroomPayload, StoreSalesAgg, StoreStaffAgg,
        StoreStockAgg,
    },
};

#[derive(Clone)]
pub struct ShowroomService {
    repo: ShowroomRepository,
}

impl ShowroomService {
    pub fn new(repo: ShowroomRepository) -> Self {
        Self { repo }
    }

    // --- CRUD ---

    pub async fn list(&self) -> Result<Vec<Showroom>, AppError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<Showroom, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("showroom"))
    }

    pub async fn create(&self, payload: &ShowroomPayload) -> Result<Showroom, AppError> {
        self.repo
            .create(
                &payload.store_name,
                payload.phone.as_deref(),
                payload.email.as_deref(),
                payload.street.as_deref(),
                &payload.city,
                &payload.state,
                payload.zip_code.as_deref(),
            )
            .await
    }

    pub async fn update(&self, id: i32, payload: &ShowroomPayload) -> Result<Showroom, AppError> {
        self.repo
            .update(
                id,
                &payload.store_name,
                payload.phone.as_deref(),
                payload.email.as_deref(),
                payload.street.as_deref(),
                &payload.city,
                &payload.state,
                payload.zip_code.as_deref(),
            )
            .await?
            .ok_or(AppError::NotFound("showroom"))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.repo.delete(id).await
    }

    // --- Relatório por loja ---
    // Fan-out das três sub-consultas + a lista de lojas; a junção por
    // store_id acontece aqui, com zero para sub-agregado ausente.
    pub async fn metrics(&self) -> Result<Vec<ShowroomMetricsEntry>, AppError> {
        let (showrooms, sales, stocks, staffs) = tokio::try_join!(
            self.repo.find_all(),
            self.repo.sales_agg(),
            self.repo.stock_agg(),
            self.repo.staff_agg(),
        )?;
        Ok(merge_store_metrics(showrooms, sales, stocks, staffs))
    }
}

// A ordem de chegada dos sub-resultados não importa: tudo é indexado
// por store_id antes da junção.
fn merge_store_metrics(
    showrooms: Vec<Showroom>,
    sales: Vec<StoreSalesAgg>,
    stocks: Vec<StoreStockAgg>,
    staffs: Vec<StoreStaffAgg>,
) -> Vec<ShowroomMetricsEntry> {
    let sales_by_store: HashMap<i32, StoreSalesAgg> =
        sales.into_iter().map(|row| (row.store_id, row)).collect();
    let stock_by_store: HashMap<i32, i64> = stocks
        .into_iter()
        .map(|row| (row.store_id, row.total_stock))
        .collect();
    let staff_by_store: HashMap<i32, i64> = staffs
        .into_iter()
        .map(|row| (row.store_id, row.staff_count))
        .collect();

    showrooms
        .into_iter()
        .map(|showroom| {
            let (total_orders, total_sales) = sales_by_store
                .get(&showroom.store_id)
                .map(|agg| (agg.total_orders, numeric::decimal_to_f64(agg.total_sales)))
                .unwrap_or((0, 0.0));

            ShowroomMetricsEntry {
                store_id: showroom.store_id,
                store_name: showroom.store_name,
                total_orders,
                total_sales,
                total_stock: stock_by_store
                    .get(&showroom.store_id)
                    .copied()
                    .unwrap_or(0),
                staff_count: staff_by_store
                    .get(&showroom.store_id)
                    .copied()
                    .unwrap_or(0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn showroom(id: i32, name: &str) -> Showroom {
        Showroom {
            store_id: id,
            store_name: name.to_string(),
            phone: None,
            email: None,
            street: None,
            city: Some("Santa Cruz".to_string()),
            state: Some("CA".to_string()),
            zip_code: None,
        }
    }

    #[test]
    fn loja_sem_vendas_reporta_zeros_e_nao_some() {
        // Loja com 2 funcionários e nenhum pedido: staff_count = 2,
        // total_orders = 0, total_sales = 0.0 (não nulo, não erro).
        let merged = merge_store_metrics(
            vec![showroom(1, "Santa Cruz Bikes")],
            vec![],
            vec![],
            vec![StoreStaffAgg {
                store_id: 1,
                staff_count: 2,
            }],
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].staff_count, 2);
        assert_eq!(merged[0].total_orders, 0);
        assert_eq!(merged[0].total_sales, 0.0);
        assert_eq!(merged[0].total_stock, 0);
    }

    #[test]
    fn juncao_por_store_id_ignora_a_ordem_dos_resultados() {
        let merged = merge_store_metrics(
            vec![showroom(1, "Santa Cruz Bikes"), showroom(2, "Baldwin Bikes")],
            vec![
                StoreSalesAgg {
                    store_id: 2,
                    total_orders: 4,
                    total_sales: Decimal::new(125_050, 2),
                },
                StoreSalesAgg {
                    store_id: 1,
                    total_orders: 1,
                    total_sales: Decimal::new(10_000, 2),
                },
            ],
            vec![StoreStockAgg {
                store_id: 2,
                total_stock: 30,
            }],
            vec![],
        );
        assert_eq!(merged[0].store_id, 1);
        assert_eq!(merged[0].total_orders, 1);
        assert_eq!(merged[0].total_sales, 100.0);
        assert_eq!(merged[1].store_id, 2);
        assert_eq!(merged[1].total_orders, 4);
        assert_eq!(merged[1].total_sales, 1250.5);
        assert_eq!(merged[1].total_stock, 30);
    }
}
