use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reservation joined with its station platform, clients and optional session.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReservationDto {
    pub id_reservation: i32,
    pub date_reservation: DateTime<Utc>,
    pub id_station: i32,
    pub plateforme: String,
    /// Client display names joined with `", "`.
    pub clients: String,
    pub nombre_clients: u64,
    pub id_session: Option<i32>,
    pub debut_session: Option<DateTime<Utc>>,
    pub fin_session: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateReservationDto {
    /// RFC 3339 timestamp, or a naive `YYYY-MM-DDTHH:MM[:SS]` read as UTC.
    #[serde(alias = "scheduled_time")]
    pub date_reservation: String,
    #[serde(alias = "station_id")]
    pub id_station: i32,
    #[serde(default)]
    pub client_ids: Vec<i32>,
}
