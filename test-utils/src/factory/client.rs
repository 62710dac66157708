//! Client factory for creating test client entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clients with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let client = ClientFactory::new(&db)
///     .first_name("Ada")
///     .last_name("Lovelace")
///     .build()
///     .await?;
/// ```
pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    last_name: String,
    first_name: String,
    email: String,
    phone: Option<String>,
}

impl<'a> ClientFactory<'a> {
    /// Creates a new ClientFactory with default values.
    ///
    /// Defaults:
    /// - last_name: `"Player{id}"`, first_name: `"Test"`
    /// - email: `"player{id}@example.com"`
    /// - phone: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            last_name: format!("Player{}", id),
            first_name: "Test".to_string(),
            email: format!("player{}@example.com", id),
            phone: None,
        }
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Builds and inserts the client entity into the database.
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        entity::client::ActiveModel {
            id: ActiveValue::NotSet,
            last_name: ActiveValue::Set(self.last_name),
            first_name: ActiveValue::Set(self.first_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a client with default values.
pub async fn create_client(db: &DatabaseConnection) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).build().await
}
