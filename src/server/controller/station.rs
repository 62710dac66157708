use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        station::{StationDto, StationPayloadDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::station::StationParams,
        service::station::StationService, state::AppState,
    },
};

/// Tag for grouping station endpoints in OpenAPI documentation
pub static STATION_TAG: &str = "station";

/// Create a station.
///
/// A `PC` station takes an optional `config_pc` description; a `Console` station takes
/// `nombre_manettes` between 1 and 8, defaulting to 2. The field for the other platform is
/// ignored.
///
/// # Returns
/// - `201 Created` - Station with its platform data
/// - `400 Bad Request` - Unknown platform or controller count out of range
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/stations",
    tag = STATION_TAG,
    request_body = StationPayloadDto,
    responses(
        (status = 201, description = "Station created", body = StationDto),
        (status = 400, description = "Invalid station data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_station(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<StationPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let station = StationService::new(&state.db)
        .create(StationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(station.into_dto())))
}

/// List every station with its reservation count.
#[utoipa::path(
    get,
    path = "/api/stations",
    tag = STATION_TAG,
    responses(
        (status = 200, description = "All stations ordered by ID", body = Vec<StationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_stations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let stations = StationService::new(&state.db).get_all().await?;

    Ok(Json(
        stations
            .into_iter()
            .map(|s| s.into_dto())
            .collect::<Vec<StationDto>>(),
    ))
}

/// Get one station.
#[utoipa::path(
    get,
    path = "/api/stations/{id}",
    tag = STATION_TAG,
    params(("id" = i32, Path, description = "Station ID")),
    responses(
        (status = 200, description = "Station found", body = StationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Station not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_station(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let station = StationService::new(&state.db).get_by_id(id).await?;

    Ok(Json(station.into_dto()))
}

/// Replace a station's platform data.
///
/// Switching platform drops the previous platform's data entirely.
///
/// # Returns
/// - `200 OK` - Updated station
/// - `400 Bad Request` - Invalid station data
/// - `404 Not Found` - No station with this ID
#[utoipa::path(
    put,
    path = "/api/stations/{id}",
    tag = STATION_TAG,
    params(("id" = i32, Path, description = "Station ID")),
    request_body = StationPayloadDto,
    responses(
        (status = 200, description = "Station updated", body = StationDto),
        (status = 400, description = "Invalid station data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Station not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_station(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<StationPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let station = StationService::new(&state.db)
        .update(id, StationParams::from_dto(payload))
        .await?;

    Ok(Json(station.into_dto()))
}

/// Delete a station.
///
/// # Returns
/// - `204 No Content` - Station and its platform data deleted
/// - `404 Not Found` - No station with this ID
/// - `409 Conflict` - Station still has reservations
#[utoipa::path(
    delete,
    path = "/api/stations/{id}",
    tag = STATION_TAG,
    params(("id" = i32, Path, description = "Station ID")),
    responses(
        (status = 204, description = "Station deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Station not found", body = ErrorDto),
        (status = 409, description = "Station has reservations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_station(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    StationService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
