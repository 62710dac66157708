//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's state
//! extraction. Both fields are cheap to clone: the connection is a pool handle and the
//! token service only holds derived keys.

use sea_orm::DatabaseConnection;

use crate::server::service::auth::token::TokenService;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Signs and verifies admin access tokens.
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
