//! Admin account domain model.

use crate::model::auth::AdminDto;

/// Authenticated administrator, without the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub id: i32,
    pub email: String,
    pub last_name: String,
    pub first_name: String,
}

impl Admin {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::admin::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            last_name: entity.last_name,
            first_name: entity.first_name,
        }
    }

    pub fn into_dto(self) -> AdminDto {
        AdminDto {
            id: self.id,
            email: self.email,
            nom: self.last_name,
            prenom: self.first_name,
        }
    }
}

/// Fields for provisioning a new admin account.
#[derive(Debug, Clone)]
pub struct CreateAdminParams {
    pub email: String,
    pub password_hash: String,
    pub last_name: String,
    pub first_name: String,
}
