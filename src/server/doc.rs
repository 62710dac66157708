use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::controller::{auth, client, dashboard, health, reservation, session, station};

/// Registers the bearer token scheme referenced by protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        auth::login,
        auth::verify,
        station::create_station,
        station::get_stations,
        station::get_station,
        station::update_station,
        station::delete_station,
        client::get_clients,
        client::get_client,
        client::create_client,
        client::update_client,
        client::delete_client,
        reservation::create_reservation,
        reservation::get_reservations,
        reservation::get_reservation,
        reservation::delete_reservation,
        session::get_sessions,
        session::start_session,
        session::end_session,
        session::delete_session,
        dashboard::get_dashboard_stats,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "auth", description = "Admin login and token verification"),
        (name = "station", description = "PC and console stations"),
        (name = "client", description = "Registered players"),
        (name = "reservation", description = "Station bookings"),
        (name = "session", description = "Play sessions started from reservations"),
        (name = "dashboard", description = "Activity rollup"),
    ),
    info(
        title = "GameZone Admin API",
        version = "0.1.0",
        description = "Back office for a gaming center: stations, clients, reservations and play sessions",
    )
)]
pub struct ApiDoc;
