//! Client domain models.

use chrono::{DateTime, Utc};

use crate::model::client::{ClientDto, ClientPayloadDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub reservation_count: u64,
}

impl Client {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::client::Model, reservation_count: u64) -> Self {
        Self {
            id: entity.id,
            last_name: entity.last_name,
            first_name: entity.first_name,
            email: entity.email,
            phone: entity.phone,
            created_at: entity.created_at,
            reservation_count,
        }
    }

    /// Name as shown in reservation and session listings, e.g. "Ada Lovelace".
    pub fn display_name(first_name: &str, last_name: &str) -> String {
        format!("{} {}", first_name, last_name)
    }

    pub fn into_dto(self) -> ClientDto {
        ClientDto {
            id_client: self.id,
            nom: self.last_name,
            prenom: self.first_name,
            email: self.email,
            telephone: self.phone,
            date_creation: self.created_at,
            total_reservations: self.reservation_count,
        }
    }
}

/// Client fields for create and update operations.
///
/// Values are normalized by the service (trimmed, email lowercased) before they reach
/// the repository.
#[derive(Debug, Clone)]
pub struct ClientParams {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl ClientParams {
    pub fn from_dto(dto: ClientPayloadDto) -> Self {
        Self {
            last_name: dto.nom,
            first_name: dto.prenom,
            email: dto.email,
            phone: dto.telephone,
        }
    }
}
