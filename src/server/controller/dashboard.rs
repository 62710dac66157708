use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    model::{api::ErrorDto, dashboard::DashboardStatsDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::dashboard::DashboardService,
        state::AppState,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Get the dashboard rollup.
///
/// Counters, per-platform tallies and the five most recently started sessions. "Today"
/// means the current UTC day.
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStatsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let stats = DashboardService::new(&state.db).stats(Utc::now()).await?;

    Ok(Json(stats.into_dto()))
}
