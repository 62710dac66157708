use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::auth::{token::TokenService, AuthService},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date. This function must
/// complete successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the configured admin account on first start.
///
/// An existing admin with the configured email is left untouched, including its password.
pub async fn ensure_admin(
    db: &sea_orm::DatabaseConnection,
    tokens: &TokenService,
    config: &Config,
) -> Result<(), AppError> {
    let service = AuthService::new(db, tokens);

    match service
        .provision_admin(&config.admin_email, &config.admin_password)
        .await?
    {
        Some(admin) => tracing::info!("Created admin account {}", admin.email),
        None => tracing::info!("Admin account {} already exists", config.admin_email),
    }

    Ok(())
}

/// Builds the CORS layer.
///
/// Restricted to `FRONTEND_URL` when configured, permissive otherwise.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer ready to wrap the router
/// - `Err(AppError::ConfigErr(InvalidValue))` - `FRONTEND_URL` is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let Some(frontend_url) = &config.frontend_url else {
        return Ok(CorsLayer::permissive());
    };

    let origin = HeaderValue::from_str(frontend_url.trim_end_matches('/')).map_err(|e| {
        ConfigError::InvalidValue {
            name: "FRONTEND_URL".to_string(),
            value: frontend_url.clone(),
            reason: e.to_string(),
        }
    })?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .expose_headers(Any))
}
