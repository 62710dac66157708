use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::admin::Admin,
    service::auth::{token::TokenService, AuthService},
};

const BEARER_PREFIX: &str = "Bearer ";

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Requires a valid bearer token naming an existing admin.
    ///
    /// # Returns
    /// - `Ok(Admin)` - The authenticated admin
    /// - `Err(AppError::AuthErr(_))` - Header missing, token rejected or admin gone
    pub async fn require(&self) -> Result<Admin, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        AuthService::new(self.db, self.tokens)
            .authenticate(token)
            .await
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
