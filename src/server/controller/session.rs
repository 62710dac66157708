use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        session::{SessionDto, StartSessionDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::session::SessionService,
        state::AppState,
    },
};

/// Tag for grouping session endpoints in OpenAPI documentation
pub static SESSION_TAG: &str = "session";

/// List sessions, most recently started first.
///
/// `duree_secondes` of an active session is computed at request time.
#[utoipa::path(
    get,
    path = "/api/sessions",
    tag = SESSION_TAG,
    responses(
        (status = 200, description = "All sessions", body = Vec<SessionDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_sessions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let sessions = SessionService::new(&state.db).get_all().await?;
    let now = Utc::now();

    Ok(Json(
        sessions
            .into_iter()
            .map(|s| s.into_dto_at(now))
            .collect::<Vec<SessionDto>>(),
    ))
}

/// Start the session of a reservation.
///
/// # Returns
/// - `201 Created` - Session in progress
/// - `404 Not Found` - No reservation with this ID
/// - `409 Conflict` - The reservation already has a session
#[utoipa::path(
    post,
    path = "/api/sessions/start",
    tag = SESSION_TAG,
    request_body = StartSessionDto,
    responses(
        (status = 201, description = "Session started", body = SessionDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Session already started", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn start_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<StartSessionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let session = SessionService::new(&state.db)
        .start(payload.id_reservation)
        .await?;

    Ok((StatusCode::CREATED, Json(session.into_dto_at(Utc::now()))))
}

/// End a session in progress.
///
/// # Returns
/// - `200 OK` - Session closed with its final duration
/// - `404 Not Found` - No session with this ID
/// - `409 Conflict` - Session already ended
#[utoipa::path(
    put,
    path = "/api/sessions/{id}/end",
    tag = SESSION_TAG,
    params(("id" = i32, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session ended", body = SessionDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 409, description = "Session already ended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn end_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let session = SessionService::new(&state.db).end(id).await?;

    Ok(Json(session.into_dto_at(Utc::now())))
}

/// Delete a session in any state.
#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    tag = SESSION_TAG,
    params(("id" = i32, Path, description = "Session ID")),
    responses(
        (status = 204, description = "Session deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    SessionService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
