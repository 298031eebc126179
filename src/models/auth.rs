// src/models/auth.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// As claims do nosso JWT. `sub` carrega o e-mail do administrador
// autenticado; `jti` identifica a sessão emitida.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub jti: Uuid,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(email(message = "'email' must be a valid e-mail address."))]
    pub email: String,

    #[validate(length(min = 1, message = "'password' is required."))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
}
