//! Play session factory for creating active or closed sessions.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sessions.
///
/// # Example
///
/// ```rust,ignore
/// let closed = SessionFactory::new(&db, reservation.id)
///     .started_at(Utc::now() - Duration::hours(2))
///     .ended_at(Some(Utc::now()))
///     .build()
///     .await?;
/// ```
pub struct SessionFactory<'a> {
    db: &'a DatabaseConnection,
    reservation_id: i32,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl<'a> SessionFactory<'a> {
    /// Creates a new SessionFactory for an active session started now.
    pub fn new(db: &'a DatabaseConnection, reservation_id: i32) -> Self {
        Self {
            db,
            reservation_id,
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    pub fn started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = started_at;
        self
    }

    pub fn ended_at(mut self, ended_at: Option<DateTime<Utc>>) -> Self {
        self.ended_at = ended_at;
        self
    }

    /// Builds and inserts the session entity into the database.
    pub async fn build(self) -> Result<entity::play_session::Model, DbErr> {
        entity::play_session::ActiveModel {
            id: ActiveValue::NotSet,
            reservation_id: ActiveValue::Set(self.reservation_id),
            started_at: ActiveValue::Set(self.started_at),
            ended_at: ActiveValue::Set(self.ended_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active session for the given reservation.
pub async fn create_session(
    db: &DatabaseConnection,
    reservation_id: i32,
) -> Result<entity::play_session::Model, DbErr> {
    SessionFactory::new(db, reservation_id).build().await
}
