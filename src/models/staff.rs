// src/models/staff.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// Linha da tabela sales.staffs. `active` segue o schema original
// (SMALLINT 0/1); `manager_id` é auto-referência opcional.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Staff {
    pub staff_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub active: i16,
    pub store_id: i32,
    pub manager_id: Option<i32>,
}

fn default_active() -> i16 {
    1
}

// Payload de create (POST) e update (PUT).
#[derive(Debug, Deserialize, Validate)]
pub struct StaffPayload {
    #[validate(length(min = 1, message = "'first_name' is required."))]
    pub first_name: String,

    #[validate(length(min = 1, message = "'last_name' is required."))]
    pub last_name: String,

    #[validate(email(message = "'email' must be a valid e-mail address."))]
    pub email: String,

    pub phone: Option<String>,

    #[validate(range(min = 0, max = 1, message = "'active' must be 0 or 1."))]
    #[serde(default = "default_active")]
    pub active: i16,

    #[validate(required(message = "'store_id' is required."))]
    pub store_id: Option<i32>,

    pub manager_id: Option<i32>,
}

// --- Relatório GET /api/staff/metrics/summary ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct StaffPerformanceEntry {
    pub staff_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub store_name: String,
    pub total_orders: i64,
    pub total_revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct StaffActivityStats {
    pub active_count: i64,
    pub inactive_count: i64,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct StoreStaffEntry {
    pub store_name: String,
    pub staff_count: i64,
}

// As chaves externas deste payload são contrato do painel
// (camelCase parcial, `total_staff` em snake_case).
#[derive(Debug, Serialize, ToSchema)]
pub struct StaffMetrics {
    #[serde(rename = "staffPerformance")]
    pub staff_performance: Vec<StaffPerformanceEntry>,

    #[serde(rename = "activityStats")]
    pub activity_stats: StaffActivityStats,

    #[serde(rename = "storeStaffDistribution")]
    pub store_staff_distribution: Vec<StoreStaffEntry>,

    pub total_staff: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_base() -> StaffPayload {
        StaffPayload {
            first_name: "Fabiola".to_string(),
            last_name: "Jackson".to_string(),
            email: "fabiola.jackson@bikes.shop".to_string(),
            phone: None,
            active: 1,
            store_id: Some(1),
            manager_id: None,
        }
    }

    #[test]
    fn payload_valido_passa() {
        assert!(payload_base().validate().is_ok());
    }

    #[test]
    fn email_invalido_e_rejeitado() {
        let mut payload = payload_base();
        payload.email = "not-an-email".to_string();
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn active_fora_da_faixa_e_rejeitado() {
        let mut payload = payload_base();
        payload.active = 2;
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("active"));
    }

    #[test]
    fn chaves_do_relatorio_seguem_o_contrato_do_painel() {
        let metrics = StaffMetrics {
            staff_performance: vec![],
            activity_stats: StaffActivityStats {
                active_count: 3,
                inactive_count: 1,
            },
            store_staff_distribution: vec![],
            total_staff: 4,
        };
        let value = serde_json::to_value(&metrics).unwrap();
        assert!(value.get("staffPerformance").is_some());
        assert!(value.get("activityStats").is_some());
        assert!(value.get("storeStaffDistribution").is_some());
        assert!(value.get("total_staff").is_some());
    }
}
