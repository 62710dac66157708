use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    service::auth::{token::TokenService, AuthService},
};

mod require;

fn tokens() -> TokenService {
    TokenService::new("middleware-test-secret", Duration::hours(1))
}

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}
