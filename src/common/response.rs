// src/common/response.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::common::{error::AppError, numeric};

// Envelope de sucesso da família de relatórios:
// `{ "message": "success", "data": [...] }`.
// Os dados passam pelo normalizador numérico antes de sair.
#[derive(Debug, Serialize)]
pub struct StatsReply {
    pub message: String,
    pub data: Value,
}

impl StatsReply {
    pub fn success<T: Serialize>(data: &T) -> Result<Self, AppError> {
        Ok(Self {
            message: "success".to_string(),
            data: normalized_json(data)?,
        })
    }
}

// Serializa e normaliza um payload de relatório sem envelope
// (os endpoints de métricas consolidadas respondem o objeto direto).
pub fn normalized_json<T: Serialize>(data: &T) -> Result<Value, AppError> {
    let raw = serde_json::to_value(data)
        .map_err(|e| anyhow::anyhow!("falha ao serializar resultado de relatório: {e}"))?;
    Ok(numeric::normalize(&raw))
}

// Envelope de falha da família de relatórios. Diferente do CRUD, o contrato
// aqui é `{ "message": "internal server error", "error": ... }` com HTTP 500.
// O detalhe do driver fica nos logs, nunca no corpo da resposta.
#[derive(Debug)]
pub struct StatsError(pub AppError);

impl From<AppError> for StatsError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for StatsError {
    fn into_response(self) -> Response {
        let description = match &self.0 {
            AppError::DatabaseError(e) => {
                tracing::error!("Falha de banco em endpoint de relatório: {}", e);
                "database query failed"
            }
            other => {
                tracing::error!("Falha em endpoint de relatório: {}", other);
                "unexpected failure"
            }
        };

        let body = Json(json!({
            "message": "internal server error",
            "error": description,
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::numeric::MAX_SAFE_INTEGER;

    #[derive(Serialize)]
    struct Entry {
        product_name: &'static str,
        total_quantity_sold: i64,
    }

    #[test]
    fn envelope_de_sucesso_normaliza_os_dados() {
        let rows = vec![
            Entry {
                product_name: "Trek 820",
                total_quantity_sold: 8,
            },
            Entry {
                product_name: "Surly Straggler",
                total_quantity_sold: MAX_SAFE_INTEGER + 1,
            },
        ];
        let reply = StatsReply::success(&rows).unwrap();
        assert_eq!(reply.message, "success");
        assert_eq!(reply.data[0]["total_quantity_sold"], json!(8));
        assert_eq!(
            reply.data[1]["total_quantity_sold"],
            json!((MAX_SAFE_INTEGER + 1).to_string())
        );
    }

    #[test]
    fn envelope_de_falha_vira_500() {
        let err = StatsError(AppError::DatabaseError(sqlx::Error::PoolClosed));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
