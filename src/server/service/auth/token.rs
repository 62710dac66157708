use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::admin::Admin,
};

/// Claims carried by an admin access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Admin ID.
    pub sub: i32,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies HS256 access tokens.
///
/// Cloned into every request through `AppState`; the keys are derived once from the
/// configured secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Signs a token for the admin, valid for the configured lifetime.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AppError::InternalError)` - Lifetime pushes the expiry past the representable range
    pub fn issue(&self, admin: &Admin) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(self.ttl).ok_or_else(|| {
            AppError::InternalError(format!("Token lifetime {} overflows expiry", self.ttl))
        })?;
        let claims = Claims {
            sub: admin.id,
            email: admin.email.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding,
        )?)
    }

    /// Checks signature and expiry and returns the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
