use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Joined view of a station: base row, satellite fields and reservation count.
///
/// Exactly one of `config_pc` / `nombre_manettes` is set, matching `plateforme`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StationDto {
    pub id_station: i32,
    pub plateforme: String,
    pub config_pc: Option<String>,
    pub nombre_manettes: Option<i32>,
    pub total_reservations: u64,
}

/// Request body for creating or replacing a station.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct StationPayloadDto {
    #[serde(alias = "platform")]
    pub plateforme: String,
    #[serde(default)]
    pub config_pc: Option<String>,
    #[serde(default)]
    pub nombre_manettes: Option<i64>,
}
