// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    paths(
        // --- Product stats ---
        handlers::product::top_products,
        handlers::product::top_products_default,
        handlers::product::revenue_by_brand,
        handlers::product::revenue_by_category,
        handlers::product::inventory_snapshot,
        handlers::product::units_by_model_year,

        // --- Sale stats ---
        handlers::sale::revenue_per_month,
        handlers::sale::turnover,
        handlers::sale::sales_metrics,

        // --- Showroom / Staff stats ---
        handlers::showroom::showroom_metrics,
        handlers::staff::staff_metrics,
    ),
    components(
        schemas(
            // --- Product ---
            models::product::TopProductEntry,
            models::product::BrandRevenueEntry,
            models::product::CategoryRevenueEntry,
            models::product::ProductStockEntry,
            models::product::ModelYearSalesEntry,

            // --- Sale ---
            models::sale::MonthlyRevenueEntry,
            models::sale::TurnoverEntry,
            models::sale::OrderStatusEntry,
            models::sale::SalesSummary,
            models::sale::StoreSalesEntry,
            models::sale::SalesMetrics,

            // --- Showroom ---
            models::showroom::ShowroomMetricsEntry,

            // --- Staff ---
            models::staff::StaffPerformanceEntry,
            models::staff::StaffActivityStats,
            models::staff::StoreStaffEntry,
            models::staff::StaffMetrics,
        )
    ),
    tags(
        (name = "Product stats", description = "Relatórios do catálogo de produtos"),
        (name = "Sale stats", description = "Relatórios de vendas"),
        (name = "Showroom stats", description = "Métricas por loja"),
        (name = "Staff stats", description = "Métricas de funcionários"),
    )
)]
pub struct ApiDoc;

// Esquema de segurança dos endpoints de escrita (Bearer JWT).
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_jwt",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}
