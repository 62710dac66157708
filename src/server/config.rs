use chrono::Duration;

use crate::server::{
    error::{config::ConfigError, AppError},
    util::parse::{parse_duration, MAX_DURATION_DAYS},
};

const DEFAULT_JWT_EXPIRES_IN: &str = "24h";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expires_in: Duration,

    pub admin_email: String,
    pub admin_password: String,

    pub host: String,
    pub port: u16,
    /// Allowed CORS origin; any origin is accepted when unset.
    pub frontend_url: Option<String>,
}

impl Config {
    /// Loads configuration from process environment variables.
    ///
    /// Call after `dotenvy::dotenv()` so values from a local `.env` file are visible.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and well formed
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is unset or empty
    /// - `Err(AppError::ConfigErr(InvalidValue))` - `JWT_EXPIRES_IN` or `PORT` is malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &str| {
            optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let expires_raw =
            optional("JWT_EXPIRES_IN").unwrap_or_else(|| DEFAULT_JWT_EXPIRES_IN.to_string());
        let jwt_expires_in =
            parse_duration(&expires_raw).ok_or_else(|| ConfigError::InvalidValue {
                name: "JWT_EXPIRES_IN".to_string(),
                value: expires_raw.clone(),
                reason: format!(
                    "expected a positive amount with optional s/m/h/d suffix, at most {} days",
                    MAX_DURATION_DAYS
                ),
            })?;

        let port = match optional("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    name: "PORT".to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expires_in,
            admin_email: required("ADMIN_EMAIL")?,
            admin_password: required("ADMIN_PASSWORD")?,
            host: optional("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            frontend_url: optional("FRONTEND_URL"),
        })
    }
}
