use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{dashboard::DashboardRepository, session::SessionRepository},
    error::AppError,
    model::dashboard::{DashboardStats, RecentSession, RECENT_SESSION_LIMIT},
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the dashboard rollup as of `now`.
    ///
    /// "Today" is the UTC calendar day containing `now`.
    pub async fn stats(&self, now: DateTime<Utc>) -> Result<DashboardStats, AppError> {
        let (day_start, day_end) = utc_day_bounds(now);
        let repo = DashboardRepository::new(self.db);

        let counts = repo.counts(day_start, day_end).await?;
        let platforms = repo.platform_tallies().await?;
        let recent_sessions = SessionRepository::new(self.db)
            .get_recent(RECENT_SESSION_LIMIT)
            .await?
            .into_iter()
            .map(|s| RecentSession {
                id: s.id,
                started_at: s.started_at,
                ended_at: s.ended_at,
                platform: s.platform,
                station_id: s.station_id,
                client_names: s.client_names,
            })
            .collect();

        Ok(DashboardStats {
            total_clients: counts.total_clients,
            total_stations: counts.total_stations,
            total_reservations: counts.total_reservations,
            active_sessions: counts.active_sessions,
            today_reservations: counts.today_reservations,
            today_sessions: counts.today_sessions,
            platforms,
            recent_sessions,
        })
    }
}

/// Midnight-to-midnight UTC window around `now`, end exclusive.
pub fn utc_day_bounds(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .unwrap_or(now);

    (start, start + Duration::days(1))
}
