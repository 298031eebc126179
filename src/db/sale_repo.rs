// src/db/sale_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::sale::{MonthlyRevenueEntry, OrderStatusCount, SalesSummary, StoreSalesEntry, TurnoverEntry},
};

#[derive(Clone)]
pub struct SaleRepository {
    pool: PgPool,
}

impl SaleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Receita mensal em ordem cronológica. O rótulo do mês é o contrato
    // herdado do painel: truncar para o mês e SOMAR UM DIA antes de
    // formatar "YYYY-MM" (compensa o deslocamento de fuso na truncagem).
    pub async fn revenue_per_month(&self) -> Result<Vec<MonthlyRevenueEntry>, AppError> {
        let entries = sqlx::query_as::<_, MonthlyRevenueEntry>(
            "SELECT to_char(date_trunc('month', o.order_date) + interval '1 day', 'YYYY-MM') AS month, \
                    SUM(oi.quantity * oi.list_price * (1 - oi.discount)) AS total \
             FROM sales.orders o \
             JOIN sales.order_items oi ON oi.order_id = o.order_id \
             GROUP BY date_trunc('month', o.order_date) \
             ORDER BY date_trunc('month', o.order_date)",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    // Giro de estoque: vendido / estocado, NULL quando o estoque é zero
    // (NULLIF no denominador), arredondado a 2 casas, NULLs por último.
    pub async fn turnover(&self) -> Result<Vec<TurnoverEntry>, AppError> {
        let entries = sqlx::query_as::<_, TurnoverEntry>(
            "SELECT p.product_name, \
                    COALESCE(sold.total_sold, 0)::bigint AS total_sold, \
                    COALESCE(stock.total_stock, 0)::bigint AS total_stock, \
                    ROUND(COALESCE(sold.total_sold, 0)::numeric \
                          / NULLIF(COALESCE(stock.total_stock, 0), 0), 2) AS turnover_rate \
             FROM production.products p \
             LEFT JOIN ( \
                 SELECT product_id, SUM(quantity) AS total_sold \
                 FROM sales.order_items GROUP BY product_id \
             ) sold ON sold.product_id = p.product_id \
             LEFT JOIN ( \
                 SELECT product_id, SUM(quantity) AS total_stock \
                 FROM production.stocks GROUP BY product_id \
             ) stock ON stock.product_id = p.product_id \
             ORDER BY turnover_rate DESC NULLS LAST, p.product_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    // Totais gerais + taxas de entrega. Percentuais com denominador zero
    // resultam NULL (semântica do banco), nunca erro de divisão.
    pub async fn summary(&self) -> Result<SalesSummary, AppError> {
        let summary = sqlx::query_as::<_, SalesSummary>(
            "SELECT (SELECT COUNT(*) FROM sales.orders)::bigint AS total_orders, \
                    (SELECT COUNT(*) FROM sales.customers)::bigint AS total_customers, \
                    COALESCE((SELECT SUM(quantity * list_price * (1 - discount)) \
                              FROM sales.order_items), 0) AS total_revenue, \
                    (SELECT ROUND(100.0 * COUNT(*) FILTER (WHERE shipped_date > required_date) \
                                  / NULLIF(COUNT(*), 0), 2) \
                     FROM sales.orders) AS late_delivery_rate, \
                    (SELECT ROUND(100.0 * COUNT(*) FILTER (WHERE shipped_date IS NULL) \
                                  / NULLIF(COUNT(*), 0), 2) \
                     FROM sales.orders) AS undelivered_rate, \
                    (SELECT ROUND(100.0 * COUNT(*) FILTER (WHERE order_status = 4) \
                                  / NULLIF(COUNT(*), 0), 2) \
                     FROM sales.orders) AS completed_rate",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(summary)
    }

    pub async fn sales_by_store(&self) -> Result<Vec<StoreSalesEntry>, AppError> {
        let entries = sqlx::query_as::<_, StoreSalesEntry>(
            "SELECT st.store_name, \
                    SUM(oi.quantity * oi.list_price * (1 - oi.discount)) AS total_revenue \
             FROM sales.orders o \
             JOIN sales.order_items oi ON oi.order_id = o.order_id \
             JOIN sales.stores st ON st.store_id = o.store_id \
             GROUP BY st.store_id, st.store_name \
             ORDER BY total_revenue DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    // Contagem por código de status; o rótulo é aplicado no service.
    pub async fn order_status_counts(&self) -> Result<Vec<OrderStatusCount>, AppError> {
        let counts = sqlx::query_as::<_, OrderStatusCount>(
            "SELECT o.order_status, COUNT(*)::bigint AS count \
             FROM sales.orders o \
             GROUP BY o.order_status \
             ORDER BY o.order_status",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(counts)
    }
}
