use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_clients: u64,
    pub total_stations: u64,
    pub total_reservations: u64,
    pub active_sessions: u64,
    pub today_reservations: u64,
    pub today_sessions: u64,
    pub station_stats: Vec<PlatformStatsDto>,
    pub recent_sessions: Vec<RecentSessionDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlatformStatsDto {
    pub plateforme: String,
    pub total_stations: u64,
    pub total_reservations: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RecentSessionDto {
    pub id_session: i32,
    pub debut_session: DateTime<Utc>,
    pub fin_session: Option<DateTime<Utc>>,
    pub plateforme: String,
    pub id_station: i32,
    pub clients: String,
}
