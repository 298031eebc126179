// src/models/sale.rs

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::product::{BrandRevenueEntry, CategoryRevenueEntry, TopProductEntry};

// Receita mensal. O campo `month` já sai do SQL como "YYYY-MM",
// calculado com o ajuste truncar-e-somar-um-dia (contrato, ver repo).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct MonthlyRevenueEntry {
    pub month: String,
    pub total: Decimal,
}

// Giro de estoque por produto. `turnover_rate` é NULL quando o
// estoque total é zero (divisão NULL-safe no SQL, nunca erro).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct TurnoverEntry {
    pub product_name: String,
    pub total_sold: i64,
    pub total_stock: i64,
    pub turnover_rate: Option<Decimal>,
}

// Contagem crua por código de status, como vem do banco.
#[derive(Debug, Clone, FromRow)]
pub struct OrderStatusCount {
    pub order_status: i16,
    pub count: i64,
}

// Entrada já rotulada da distribuição de status.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderStatusEntry {
    pub status: String,
    pub count: i64,
}

// Mapeamento fixo código -> rótulo; códigos desconhecidos viram "Status {code}".
pub fn status_label(code: i16) -> String {
    match code {
        1 => "Pending".to_string(),
        2 => "Processing".to_string(),
        3 => "Rejected".to_string(),
        4 => "Completed".to_string(),
        other => format!("Status {other}"),
    }
}

// Totais gerais + taxas de entrega (percentuais arredondados a 2 casas,
// NULL quando o denominador é zero).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct SalesSummary {
    pub total_orders: i64,
    pub total_customers: i64,
    pub total_revenue: Decimal,
    pub late_delivery_rate: Option<Decimal>,
    pub undelivered_rate: Option<Decimal>,
    pub completed_rate: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct StoreSalesEntry {
    pub store_name: String,
    pub total_revenue: Decimal,
}

// Payload composto do GET /api/sale/metrics: sete sub-consultas
// independentes disparadas em paralelo e reunidas aqui.
#[derive(Debug, Serialize, ToSchema)]
pub struct SalesMetrics {
    pub summary: SalesSummary,
    pub sales_by_store: Vec<StoreSalesEntry>,
    pub sales_by_category: Vec<CategoryRevenueEntry>,
    pub sales_by_brand: Vec<BrandRevenueEntry>,
    pub monthly_trend: Vec<MonthlyRevenueEntry>,
    pub top_products: Vec<TopProductEntry>,
    pub order_status_distribution: Vec<OrderStatusEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotulos_conhecidos() {
        assert_eq!(status_label(1), "Pending");
        assert_eq!(status_label(2), "Processing");
        assert_eq!(status_label(3), "Rejected");
        assert_eq!(status_label(4), "Completed");
    }

    #[test]
    fn codigo_desconhecido_vira_status_n() {
        assert_eq!(status_label(0), "Status 0");
        assert_eq!(status_label(9), "Status 9");
    }

    #[test]
    fn rotulagem_preserva_as_contagens() {
        let raw = vec![
            OrderStatusCount {
                order_status: 1,
                count: 10,
            },
            OrderStatusCount {
                order_status: 4,
                count: 32,
            },
            OrderStatusCount {
                order_status: 7,
                count: 1,
            },
        ];
        let total: i64 = raw.iter().map(|r| r.count).sum();
        let labelled: Vec<OrderStatusEntry> = raw
            .iter()
            .map(|r| OrderStatusEntry {
                status: status_label(r.order_status),
                count: r.count,
            })
            .collect();
        assert_eq!(labelled.iter().map(|e| e.count).sum::<i64>(), total);
        assert_eq!(labelled[2].status, "Status 7");
    }
}
