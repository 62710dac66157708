//! Reservation factory for creating reservations with their client associations.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let reservation = ReservationFactory::new(&db, station.id, &[client.id])
///     .scheduled_at(Utc::now())
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    station_id: i32,
    client_ids: Vec<i32>,
    scheduled_at: DateTime<Utc>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory scheduled one hour from now.
    pub fn new(db: &'a DatabaseConnection, station_id: i32, client_ids: &[i32]) -> Self {
        Self {
            db,
            station_id,
            client_ids: client_ids.to_vec(),
            scheduled_at: Utc::now() + chrono::Duration::hours(1),
        }
    }

    pub fn scheduled_at(mut self, scheduled_at: DateTime<Utc>) -> Self {
        self.scheduled_at = scheduled_at;
        self
    }

    /// Inserts the reservation row followed by one association row per client.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            scheduled_at: ActiveValue::Set(self.scheduled_at),
            station_id: ActiveValue::Set(self.station_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        for client_id in self.client_ids {
            entity::reservation_client::ActiveModel {
                reservation_id: ActiveValue::Set(reservation.id),
                client_id: ActiveValue::Set(client_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(reservation)
    }
}

/// Creates a reservation one hour from now for the given station and clients.
pub async fn create_reservation(
    db: &DatabaseConnection,
    station_id: i32,
    client_ids: &[i32],
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, station_id, client_ids)
        .build()
        .await
}
