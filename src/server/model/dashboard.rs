//! Dashboard rollup model.

use chrono::{DateTime, Utc};

use crate::{
    model::dashboard::{DashboardStatsDto, PlatformStatsDto, RecentSessionDto},
    server::model::station::PlatformTally,
};

/// Number of sessions listed in the dashboard's recent activity.
pub const RECENT_SESSION_LIMIT: u64 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct RecentSession {
    pub id: i32,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub platform: String,
    pub station_id: i32,
    pub client_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_clients: u64,
    pub total_stations: u64,
    pub total_reservations: u64,
    pub active_sessions: u64,
    pub today_reservations: u64,
    pub today_sessions: u64,
    pub platforms: Vec<PlatformTally>,
    pub recent_sessions: Vec<RecentSession>,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            total_clients: self.total_clients,
            total_stations: self.total_stations,
            total_reservations: self.total_reservations,
            active_sessions: self.active_sessions,
            today_reservations: self.today_reservations,
            today_sessions: self.today_sessions,
            station_stats: self
                .platforms
                .into_iter()
                .map(|tally| PlatformStatsDto {
                    plateforme: tally.platform.to_string(),
                    total_stations: tally.stations,
                    total_reservations: tally.reservations,
                })
                .collect(),
            recent_sessions: self
                .recent_sessions
                .into_iter()
                .map(|s| RecentSessionDto {
                    id_session: s.id,
                    debut_session: s.started_at,
                    fin_session: s.ended_at,
                    plateforme: s.platform,
                    id_station: s.station_id,
                    clients: s.client_names.join(", "),
                })
                .collect(),
        }
    }
}
