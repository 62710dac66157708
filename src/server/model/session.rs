//! Play session domain model and lifecycle helpers.
//!
//! A reservation moves through `NoSession → Active → Closed`. `NoSession` is the
//! absence of a row; the other two states are derived from `ended_at`.

use chrono::{DateTime, Duration, Utc};

use crate::model::session::SessionDto;

pub const STATUS_ACTIVE: &str = "En cours";
pub const STATUS_CLOSED: &str = "Terminée";

/// Lifecycle state of an existing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Closed,
}

/// Session joined with its reservation, station and clients.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: i32,
    pub reservation_id: i32,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub scheduled_at: DateTime<Utc>,
    pub station_id: i32,
    pub platform: String,
    pub client_names: Vec<String>,
}

impl Session {
    pub fn state(&self) -> SessionState {
        state_of(self.ended_at)
    }

    /// Elapsed time at `now`, never negative.
    ///
    /// Closed sessions measure up to `ended_at`; active ones up to `now`, so the value
    /// changes on every call while the session is in progress.
    pub fn duration_at(&self, now: DateTime<Utc>) -> Duration {
        elapsed(self.started_at, self.ended_at, now)
    }

    /// Converts to a DTO, computing the live duration at `now`.
    pub fn into_dto_at(self, now: DateTime<Utc>) -> SessionDto {
        let duration = self.duration_at(now);
        let status = match self.state() {
            SessionState::Active => STATUS_ACTIVE,
            SessionState::Closed => STATUS_CLOSED,
        };

        SessionDto {
            id_session: self.id,
            debut_session: self.started_at,
            fin_session: self.ended_at,
            id_reservation: self.reservation_id,
            date_reservation: self.scheduled_at,
            id_station: self.station_id,
            plateforme: self.platform,
            clients: self.client_names.join(", "),
            status: status.to_string(),
            duree_secondes: duration.num_seconds(),
        }
    }
}

pub fn state_of(ended_at: Option<DateTime<Utc>>) -> SessionState {
    match ended_at {
        Some(_) => SessionState::Closed,
        None => SessionState::Active,
    }
}

/// `(ended_at or now) - started_at`, clamped at zero.
pub fn elapsed(
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Duration {
    let end = ended_at.unwrap_or(now);
    (end - started_at).max(Duration::zero())
}
