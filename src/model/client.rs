use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClientDto {
    pub id_client: i32,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: Option<String>,
    pub date_creation: DateTime<Utc>,
    pub total_reservations: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ClientPayloadDto {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    #[serde(default)]
    pub telephone: Option<String>,
}
