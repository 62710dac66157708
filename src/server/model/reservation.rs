//! Reservation domain models.

use chrono::{DateTime, Utc};

use crate::model::reservation::{CreateReservationDto, ReservationDto};

/// Session attached to a reservation, as shown alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub id: i32,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

/// Reservation joined with station platform, client names and session.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub scheduled_at: DateTime<Utc>,
    pub station_id: i32,
    pub platform: String,
    /// Display names ordered by client id.
    pub client_names: Vec<String>,
    pub session: Option<SessionSummary>,
}

impl Reservation {
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id_reservation: self.id,
            date_reservation: self.scheduled_at,
            id_station: self.station_id,
            plateforme: self.platform,
            nombre_clients: self.client_names.len() as u64,
            clients: self.client_names.join(", "),
            id_session: self.session.as_ref().map(|s| s.id),
            debut_session: self.session.as_ref().map(|s| s.started_at),
            fin_session: self.session.and_then(|s| s.ended_at),
        }
    }
}

/// Unvalidated reservation input as received from the API.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub scheduled_at: String,
    pub station_id: i32,
    pub client_ids: Vec<i32>,
}

impl CreateReservationParams {
    pub fn from_dto(dto: CreateReservationDto) -> Self {
        Self {
            scheduled_at: dto.date_reservation,
            station_id: dto.id_station,
            client_ids: dto.client_ids,
        }
    }
}

/// Validated reservation ready to be persisted.
///
/// `client_ids` is non-empty and free of duplicates.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub scheduled_at: DateTime<Utc>,
    pub station_id: i32,
    pub client_ids: Vec<i32>,
}
