// src/services/sale_service.rs

use crate::{
    common::error::AppError,
    db::{ProductRepository, SaleRepository},
    models::sale::{
        status_label, MonthlyRevenueEntry, OrderStatusEntry, SalesMetrics, TurnoverEntry,
    },
};

// Quantos produtos entram no ranking dentro do painel consolidado.
const METRICS_TOP_PRODUCTS: i64 = 5;

#[derive(Clone)]
pub struct SaleService {
    repo: SaleRepository,
    products: ProductRepository,
}

impl SaleService {
    pub fn new(repo: SaleRepository, products: ProductRepository) -> Self {
        Self { repo, products }
    }

    pub async fn revenue_per_month(&self) -> Result<Vec<MonthlyRevenueEntry>, AppError> {
        self.repo.revenue_per_month().await
    }

    pub async fn turnover(&self) -> Result<Vec<TurnoverEntry>, AppError> {
        self.repo.turnover().await
    }

    // Painel consolidado: sete sub-consultas independentes disparadas em
    // paralelo (fan-out) e reunidas num único payload (fan-in).
    pub async fn sales_metrics(&self) -> Result<SalesMetrics, AppError> {
        let (
            summary,
            sales_by_store,
            sales_by_category,
            sales_by_brand,
            monthly_trend,
            top_products,
            status_counts,
        ) = tokio::try_join!(
            self.repo.summary(),
            self.repo.sales_by_store(),
            self.products.revenue_by_category(),
            self.products.revenue_by_brand(),
            self.repo.revenue_per_month(),
            self.products.top_products(METRICS_TOP_PRODUCTS),
            self.repo.order_status_counts(),
        )?;

        let order_status_distribution = status_counts
            .into_iter()
            .map(|row| OrderStatusEntry {
                status: status_label(row.order_status),
                count: row.count,
            })
            .collect();

        Ok(SalesMetrics {
            summary,
            sales_by_store,
            sales_by_category,
            sales_by_brand,
            monthly_trend,
            top_products,
            order_status_distribution,
        })
    }
}
