use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        client::{ClientDto, ClientPayloadDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::client::ClientParams,
        service::client::ClientService, state::AppState,
    },
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "client";

/// List clients ordered by last name.
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = CLIENT_TAG,
    responses(
        (status = 200, description = "All clients", body = Vec<ClientDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let clients = ClientService::new(&state.db).get_all().await?;

    Ok(Json(
        clients
            .into_iter()
            .map(|c| c.into_dto())
            .collect::<Vec<ClientDto>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client found", body = ClientDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let client = ClientService::new(&state.db).get_by_id(id).await?;

    Ok(Json(client.into_dto()))
}

/// Register a client.
///
/// # Returns
/// - `201 Created` - Client registered
/// - `400 Bad Request` - Empty name or invalid email
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = CLIENT_TAG,
    request_body = ClientPayloadDto,
    responses(
        (status = 201, description = "Client created", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ClientPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let client = ClientService::new(&state.db)
        .create(ClientParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(client.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    request_body = ClientPayloadDto,
    responses(
        (status = 200, description = "Client updated", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 409, description = "Email used by another client", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<ClientPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let client = ClientService::new(&state.db)
        .update(id, ClientParams::from_dto(payload))
        .await?;

    Ok(Json(client.into_dto()))
}

/// Delete a client that is not part of any reservation.
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 409, description = "Client has reservations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    ClientService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
