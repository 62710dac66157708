use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        auth::{LoginDto, LoginResponseDto, VerifyResponseDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with admin credentials.
///
/// Exchanges an email and password for a signed access token to send as
/// `Authorization: Bearer <token>` on every other endpoint.
///
/// # Returns
/// - `200 OK` - Token and admin profile
/// - `400 Bad Request` - Malformed email or password too short
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Invalid login payload", body = ValidationErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let (token, admin) = AuthService::new(&state.db, &state.tokens)
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponseDto {
        token,
        admin: admin.into_dto(),
    }))
}

/// Verify the current access token.
///
/// # Returns
/// - `200 OK` - Token valid, returns the admin it belongs to
/// - `401 Unauthorized` - Missing, invalid or expired token
#[utoipa::path(
    get,
    path = "/api/auth/verify",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Token is valid", body = VerifyResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    Ok(Json(VerifyResponseDto {
        admin: admin.into_dto(),
    }))
}
