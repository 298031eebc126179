// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro central, com `thiserror` para melhor ergonomia.
// Os handlers CRUD respondem sempre com o envelope `{ "error": ... }`
// (mais `dependencies` nos conflitos de integridade referencial).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Regras de negócio violadas antes de qualquer acesso ao banco
    // (preço negativo, staff gerente de si mesmo, FK de catálogo inexistente).
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    // Conflito de integridade referencial: a exclusão foi abortada porque
    // existem linhas dependentes. `dependencies` carrega a contagem por tabela.
    #[error("{message}")]
    Conflict {
        message: String,
        dependencies: Option<serde_json::Value>,
    },

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    // Variante genérica para qualquer outro erro inesperado.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "one or more fields are invalid",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InvalidInput(message) => {
                let body = Json(json!({ "error": message }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::NotFound(resource) => {
                let body = Json(json!({ "error": format!("{resource} not found") }));
                return (StatusCode::NOT_FOUND, body).into_response();
            }
            AppError::Conflict {
                message,
                dependencies,
            } => {
                let body = match dependencies {
                    Some(deps) => Json(json!({ "error": message, "dependencies": deps })),
                    None => Json(json!({ "error": message })),
                };
                return (StatusCode::CONFLICT, body).into_response();
            }
            AppError::EmailAlreadyExists => (StatusCode::CONFLICT, "email already exists"),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "invalid credentials"),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "missing or invalid authentication token",
            ),

            // Todos os outros erros (DatabaseError, InternalServerError...) viram 500.
            // O detalhe fica nos logs; o cliente recebe uma mensagem neutra.
            ref e => {
                tracing::error!("Erro interno do servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_com_dependencias_vira_409() {
        let err = AppError::Conflict {
            message: "cannot delete showroom".into(),
            dependencies: Some(json!({ "orders": 3, "staffs": 2, "stocks": 10 })),
        };
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn not_found_vira_404() {
        let err = AppError::NotFound("product");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn entrada_invalida_vira_400() {
        let err = AppError::InvalidInput("list_price must be non-negative".into());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn erro_de_banco_vira_500() {
        let err = AppError::DatabaseError(sqlx::Error::PoolClosed);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
