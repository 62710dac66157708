use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        reservation::{CreateReservationDto, ReservationDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        model::reservation::CreateReservationParams, service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Book a station for one or more clients.
///
/// `date_reservation` accepts RFC 3339 or `YYYY-MM-DDTHH:MM[:SS]`, read as UTC. Repeated
/// client IDs are counted once.
///
/// # Returns
/// - `201 Created` - Reservation with station platform and client names
/// - `400 Bad Request` - Unparseable time or no clients
/// - `404 Not Found` - Unknown station or client
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 400, description = "Invalid reservation data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Station or client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateReservationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let reservation = ReservationService::new(&state.db)
        .create(CreateReservationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// List reservations, latest scheduled first.
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "All reservations", body = Vec<ReservationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let reservations = ReservationService::new(&state.db).get_all().await?;

    Ok(Json(
        reservations
            .into_iter()
            .map(|r| r.into_dto())
            .collect::<Vec<ReservationDto>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation found", body = ReservationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let reservation = ReservationService::new(&state.db).get_by_id(id).await?;

    Ok(Json(reservation.into_dto()))
}

/// Delete a reservation with its client links and finished session.
///
/// # Returns
/// - `204 No Content` - Reservation deleted
/// - `404 Not Found` - No reservation with this ID
/// - `409 Conflict` - Its session is still in progress
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Session in progress", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    ReservationService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
