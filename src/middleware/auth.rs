// src/middleware/auth.rs

use axum::{
    extract::{FromRequestParts, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::{common::error::AppError, config::AppState, models::auth::Claims};

// Guarda de escrita: métodos que mudam estado exigem
// `Authorization: Bearer <jwt>`; leituras passam direto.
// As claims validadas ficam nos extensions da requisição.
pub async fn write_guard(
    State(app_state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AppError> {
    if !is_mutating(request.method().as_str()) {
        return Ok(next.run(request).await);
    }

    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok());

    if let Some(auth_header) = auth_header {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            let claims = app_state.auth_service.validate_token(token)?;
            request.extensions_mut().insert(claims);
            return Ok(next.run(request).await);
        }
    }

    Err(AppError::InvalidToken)
}

fn is_mutating(method: &str) -> bool {
    matches!(method, "POST" | "PUT" | "PATCH" | "DELETE")
}

// Extrator para obter o principal autenticado diretamente nos handlers
// de escrita (inserido pelo write_guard).
pub struct AdminPrincipal(pub Claims);

impl<S> FromRequestParts<S> for AdminPrincipal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AdminPrincipal)
            .ok_or(AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apenas_metodos_de_escrita_exigem_token() {
        assert!(is_mutating("POST"));
        assert!(is_mutating("PUT"));
        assert!(is_mutating("DELETE"));
        assert!(!is_mutating("GET"));
        assert!(!is_mutating("HEAD"));
        assert!(!is_mutating("OPTIONS"));
    }
}
