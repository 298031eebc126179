// src/services/auth.rs

use bcrypt::verify;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{common::error::AppError, models::auth::Claims};

// Verificação real de credenciais atrás do contrato de middleware:
// aceita/rejeita e anexa o principal (claims) à requisição.
// As credenciais do administrador vêm da configuração (hash bcrypt),
// não de uma tabela — o schema de vendas não define um cadastro de login.
#[derive(Clone)]
pub struct AuthService {
    admin_email: String,
    admin_password_hash: String,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(admin_email: String, admin_password_hash: String, jwt_secret: String) -> Self {
        Self {
            admin_email,
            admin_password_hash,
            jwt_secret,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        if email != self.admin_email {
            return Err(AppError::InvalidCredentials);
        }

        let password_clone = password.to_owned();
        let hash_clone = self.admin_password_hash.clone();

        // bcrypt é caro de propósito; roda fora do executor async.
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        self.create_token(email)
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        Ok(token_data.claims)
    }

    fn create_token(&self, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: email.to_string(),
            jti: Uuid::new_v4(),
            iat: now.timestamp() as usize,
            exp: expires_at.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        // Hash de "segredo123" com custo mínimo, só para os testes.
        let hash = bcrypt::hash("segredo123", 4).unwrap();
        AuthService::new(
            "admin@bikes.shop".to_string(),
            hash,
            "chave-de-teste".to_string(),
        )
    }

    #[tokio::test]
    async fn login_valido_emite_token_verificavel() {
        let svc = service();
        let token = svc.login("admin@bikes.shop", "segredo123").await.unwrap();
        let claims = svc.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "admin@bikes.shop");
    }

    #[tokio::test]
    async fn senha_errada_e_rejeitada() {
        let svc = service();
        let result = svc.login("admin@bikes.shop", "outra-senha").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn email_desconhecido_e_rejeitado() {
        let svc = service();
        let result = svc.login("alguem@bikes.shop", "segredo123").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[test]
    fn token_forjado_e_rejeitado() {
        let svc = service();
        assert!(matches!(
            svc.validate_token("nem.um.jwt"),
            Err(AppError::InvalidToken)
        ));
    }
}
