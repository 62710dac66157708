use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SessionDto {
    pub id_session: i32,
    pub debut_session: DateTime<Utc>,
    pub fin_session: Option<DateTime<Utc>>,
    pub id_reservation: i32,
    pub date_reservation: DateTime<Utc>,
    pub id_station: i32,
    pub plateforme: String,
    pub clients: String,
    /// `"En cours"` while active, `"Terminée"` once closed.
    pub status: String,
    /// Elapsed seconds, computed at response time for active sessions.
    pub duree_secondes: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct StartSessionDto {
    #[serde(alias = "reservation_id")]
    pub id_reservation: i32,
}
