//! Reservation repository.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::{
    client::Client,
    reservation::{NewReservation, Reservation, SessionSummary},
};

/// Outcome of [`ReservationRepository::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationDeletion {
    Deleted,
    NotFound,
    /// A session still in progress references the reservation; nothing was written.
    SessionActive,
}

pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a reservation and its client associations atomically.
    ///
    /// # Arguments
    /// - `params` - Validated reservation; `client_ids` must be non-empty and unique
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Created reservation joined with platform and client names
    /// - `Err(DbErr)` - Any insert failed; neither the reservation nor its associations
    ///   were persisted
    pub async fn create(&self, params: NewReservation) -> Result<Reservation, DbErr> {
        let txn = self.db.begin().await?;

        let reservation = entity::reservation::ActiveModel {
            scheduled_at: ActiveValue::Set(params.scheduled_at),
            station_id: ActiveValue::Set(params.station_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for client_id in params.client_ids {
            entity::reservation_client::ActiveModel {
                reservation_id: ActiveValue::Set(reservation.id),
                client_id: ActiveValue::Set(client_id),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        let mut views = attach_details(self.db, vec![reservation]).await?;
        views.pop().ok_or_else(|| {
            DbErr::RecordNotFound("Reservation not found after creation".to_string())
        })
    }

    /// Gets all reservations, latest scheduled first.
    pub async fn get_all(&self) -> Result<Vec<Reservation>, DbErr> {
        let reservations = entity::prelude::Reservation::find()
            .order_by_desc(entity::reservation::Column::ScheduledAt)
            .order_by_desc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        attach_details(self.db, reservations).await
    }

    /// Gets a reservation by ID joined with platform, client names and session.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let Some(reservation) = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(attach_details(self.db, vec![reservation]).await?.pop())
    }

    /// Finds the raw reservation row.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(id).one(self.db).await
    }

    /// Deletes a reservation with its client associations and closed session, atomically.
    ///
    /// The reservation row is locked first (`FOR UPDATE` where supported), so a session
    /// started concurrently either commits before the check below and blocks the delete,
    /// or fails its foreign key once the reservation is gone.
    ///
    /// # Returns
    /// - `Ok(ReservationDeletion::Deleted)` - Reservation and its dependents removed
    /// - `Ok(ReservationDeletion::NotFound)` - No reservation with this ID
    /// - `Ok(ReservationDeletion::SessionActive)` - An active session remains; rolled back
    pub async fn delete(&self, id: i32) -> Result<ReservationDeletion, DbErr> {
        let txn = self.db.begin().await?;

        let locked = entity::prelude::Reservation::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?;
        if locked.is_none() {
            return Ok(ReservationDeletion::NotFound);
        }

        entity::prelude::PlaySession::delete_many()
            .filter(entity::play_session::Column::ReservationId.eq(id))
            .filter(entity::play_session::Column::EndedAt.is_not_null())
            .exec(&txn)
            .await?;

        let active = entity::prelude::PlaySession::find()
            .filter(entity::play_session::Column::ReservationId.eq(id))
            .count(&txn)
            .await?;
        if active > 0 {
            txn.rollback().await?;
            return Ok(ReservationDeletion::SessionActive);
        }

        entity::prelude::ReservationClient::delete_many()
            .filter(entity::reservation_client::Column::ReservationId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            return Ok(ReservationDeletion::NotFound);
        }

        txn.commit().await?;

        Ok(ReservationDeletion::Deleted)
    }
}

/// Joins reservation rows with station platform, client names and session, keeping order.
async fn attach_details<C: ConnectionTrait>(
    conn: &C,
    reservations: Vec<entity::reservation::Model>,
) -> Result<Vec<Reservation>, DbErr> {
    if reservations.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = reservations.iter().map(|r| r.id).collect();
    let station_ids: Vec<i32> = reservations.iter().map(|r| r.station_id).collect();

    let platforms = platforms_by_station(conn, station_ids).await?;
    let mut names = client_names_by_reservation(conn, ids.clone()).await?;

    let mut sessions: HashMap<i32, SessionSummary> = entity::prelude::PlaySession::find()
        .filter(entity::play_session::Column::ReservationId.is_in(ids))
        .all(conn)
        .await?
        .into_iter()
        .map(|s| {
            (
                s.reservation_id,
                SessionSummary {
                    id: s.id,
                    started_at: s.started_at,
                    ended_at: s.ended_at,
                },
            )
        })
        .collect();

    Ok(reservations
        .into_iter()
        .map(|r| Reservation {
            id: r.id,
            scheduled_at: r.scheduled_at,
            station_id: r.station_id,
            platform: platforms.get(&r.station_id).cloned().unwrap_or_default(),
            client_names: names.remove(&r.id).unwrap_or_default(),
            session: sessions.remove(&r.id),
        })
        .collect())
}

/// Maps station IDs to their stored platform.
pub(crate) async fn platforms_by_station<C: ConnectionTrait>(
    conn: &C,
    station_ids: Vec<i32>,
) -> Result<HashMap<i32, String>, DbErr> {
    if station_ids.is_empty() {
        return Ok(HashMap::new());
    }

    Ok(entity::prelude::Station::find()
        .filter(entity::station::Column::Id.is_in(station_ids))
        .all(conn)
        .await?
        .into_iter()
        .map(|s| (s.id, s.platform))
        .collect())
}

/// Maps reservation IDs to the display names of their clients, ordered by client ID.
pub(crate) async fn client_names_by_reservation<C: ConnectionTrait>(
    conn: &C,
    reservation_ids: Vec<i32>,
) -> Result<HashMap<i32, Vec<String>>, DbErr> {
    if reservation_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let links = entity::prelude::ReservationClient::find()
        .filter(entity::reservation_client::Column::ReservationId.is_in(reservation_ids))
        .order_by_asc(entity::reservation_client::Column::ClientId)
        .all(conn)
        .await?;

    let client_ids: Vec<i32> = links.iter().map(|l| l.client_id).collect();
    let clients: HashMap<i32, entity::client::Model> = entity::prelude::Client::find()
        .filter(entity::client::Column::Id.is_in(client_ids))
        .all(conn)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

    let mut names: HashMap<i32, Vec<String>> = HashMap::new();
    for link in links {
        if let Some(client) = clients.get(&link.client_id) {
            names
                .entry(link.reservation_id)
                .or_default()
                .push(Client::display_name(&client.first_name, &client.last_name));
        }
    }

    Ok(names)
}
