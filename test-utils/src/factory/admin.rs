//! Admin factory for creating test admin accounts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password every factory-created admin can log in with unless overridden.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Minimum bcrypt cost (mirrors the private `bcrypt::MIN_COST`).
const BCRYPT_MIN_COST: u32 = 4;

/// Factory for creating test admins with customizable fields.
///
/// The password is hashed with the minimum bcrypt cost to keep tests fast.
///
/// # Example
///
/// ```rust,ignore
/// let admin = AdminFactory::new(&db)
///     .email("boss@gamezone.test")
///     .password("secret42")
///     .build()
///     .await?;
/// ```
pub struct AdminFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    password: String,
    last_name: String,
    first_name: String,
}

impl<'a> AdminFactory<'a> {
    /// Creates a new AdminFactory with default values.
    ///
    /// Defaults:
    /// - email: `"admin{id}@gamezone.test"`
    /// - password: [`DEFAULT_PASSWORD`]
    /// - last_name: `"Admin"`, first_name: `"GameZone"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("admin{}@gamezone.test", id),
            password: DEFAULT_PASSWORD.to_string(),
            last_name: "Admin".to_string(),
            first_name: "GameZone".to_string(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds and inserts the admin entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::admin::Model)` - Created admin entity
    /// - `Err(DbErr)` - Hashing failure or database error during insert
    pub async fn build(self) -> Result<entity::admin::Model, DbErr> {
        let password_hash = bcrypt::hash(&self.password, BCRYPT_MIN_COST)
            .map_err(|e| DbErr::Custom(format!("Failed to hash password: {}", e)))?;

        entity::admin::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(password_hash),
            last_name: ActiveValue::Set(self.last_name),
            first_name: ActiveValue::Set(self.first_name),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admin with default values and [`DEFAULT_PASSWORD`].
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::admin::Model, DbErr> {
    AdminFactory::new(db).build().await
}
