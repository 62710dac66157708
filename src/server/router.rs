use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{login, verify},
        client::{create_client, delete_client, get_client, get_clients, update_client},
        dashboard::get_dashboard_stats,
        health::health,
        reservation::{create_reservation, delete_reservation, get_reservation, get_reservations},
        session::{delete_session, end_session, get_sessions, start_session},
        station::{create_station, delete_station, get_station, get_stations, update_station},
    },
    doc::ApiDoc,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/auth/login", post(login))
        .route("/api/auth/verify", get(verify))
        .route("/api/stations", get(get_stations).post(create_station))
        .route(
            "/api/stations/{id}",
            get(get_station).put(update_station).delete(delete_station),
        )
        .route("/api/clients", get(get_clients).post(create_client))
        .route(
            "/api/clients/{id}",
            get(get_client).put(update_client).delete(delete_client),
        )
        .route(
            "/api/reservations",
            get(get_reservations).post(create_reservation),
        )
        .route(
            "/api/reservations/{id}",
            get(get_reservation).delete(delete_reservation),
        )
        .route("/api/sessions", get(get_sessions))
        .route("/api/sessions/start", post(start_session))
        .route("/api/sessions/{id}/end", put(end_session))
        .route("/api/sessions/{id}", axum::routing::delete(delete_session))
        .route("/api/dashboard/stats", get(get_dashboard_stats))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}
