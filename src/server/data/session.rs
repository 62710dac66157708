//! Play session repository.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::server::{
    data::reservation::{client_names_by_reservation, platforms_by_station},
    model::session::Session,
};

pub struct SessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts a session for a reservation unless one already exists.
    ///
    /// The existence check and the insert share one transaction. Two racing calls can
    /// still both pass the check on some backends; the unique index on `reservation_id`
    /// then rejects the second insert with a unique constraint violation.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Session created with `ended_at` unset
    /// - `Ok(None)` - The reservation already has a session
    /// - `Err(DbErr)` - Database error, including unique or foreign key violations
    pub async fn start(
        &self,
        reservation_id: i32,
        started_at: DateTime<Utc>,
    ) -> Result<Option<entity::play_session::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let existing = entity::prelude::PlaySession::find()
            .filter(entity::play_session::Column::ReservationId.eq(reservation_id))
            .count(&txn)
            .await?;

        if existing > 0 {
            return Ok(None);
        }

        let session = entity::play_session::ActiveModel {
            reservation_id: ActiveValue::Set(reservation_id),
            started_at: ActiveValue::Set(started_at),
            ended_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Some(session))
    }

    /// Sets `ended_at` on a session that is still active.
    ///
    /// The update is conditional on `ended_at IS NULL`, so an already closed session is
    /// never overwritten even if two end requests race.
    ///
    /// # Returns
    /// - `Ok(true)` - Session closed by this call
    /// - `Ok(false)` - Session missing or already closed
    pub async fn end(&self, id: i32, ended_at: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::PlaySession::update_many()
            .col_expr(
                entity::play_session::Column::EndedAt,
                Expr::value(ended_at),
            )
            .filter(entity::play_session::Column::Id.eq(id))
            .filter(entity::play_session::Column::EndedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a session regardless of its state.
    ///
    /// # Returns
    /// - `Ok(true)` - Session deleted
    /// - `Ok(false)` - No session with this ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PlaySession::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds the raw session row.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::play_session::Model>, DbErr> {
        entity::prelude::PlaySession::find_by_id(id).one(self.db).await
    }

    /// Finds the session attached to a reservation, if any.
    pub async fn find_by_reservation(
        &self,
        reservation_id: i32,
    ) -> Result<Option<entity::play_session::Model>, DbErr> {
        entity::prelude::PlaySession::find()
            .filter(entity::play_session::Column::ReservationId.eq(reservation_id))
            .one(self.db)
            .await
    }

    /// Gets a session joined with its reservation, station platform and clients.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Session>, DbErr> {
        let Some(session) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(attach_details(self.db, vec![session]).await?.pop())
    }

    /// Gets all sessions, most recently started first.
    pub async fn get_all(&self) -> Result<Vec<Session>, DbErr> {
        let sessions = entity::prelude::PlaySession::find()
            .order_by_desc(entity::play_session::Column::StartedAt)
            .order_by_desc(entity::play_session::Column::Id)
            .all(self.db)
            .await?;

        attach_details(self.db, sessions).await
    }

    /// Gets the `limit` most recently started sessions.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<Session>, DbErr> {
        let sessions = entity::prelude::PlaySession::find()
            .order_by_desc(entity::play_session::Column::StartedAt)
            .order_by_desc(entity::play_session::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        attach_details(self.db, sessions).await
    }
}

async fn attach_details<C: ConnectionTrait>(
    conn: &C,
    sessions: Vec<entity::play_session::Model>,
) -> Result<Vec<Session>, DbErr> {
    if sessions.is_empty() {
        return Ok(Vec::new());
    }

    let reservation_ids: Vec<i32> = sessions.iter().map(|s| s.reservation_id).collect();

    let reservations: HashMap<i32, entity::reservation::Model> =
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Id.is_in(reservation_ids.clone()))
            .all(conn)
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

    let station_ids: Vec<i32> = reservations.values().map(|r| r.station_id).collect();
    let platforms = platforms_by_station(conn, station_ids).await?;
    let mut names = client_names_by_reservation(conn, reservation_ids).await?;

    sessions
        .into_iter()
        .map(|s| {
            let reservation = reservations.get(&s.reservation_id).ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Reservation {} for session {} not found",
                    s.reservation_id, s.id
                ))
            })?;

            Ok(Session {
                id: s.id,
                reservation_id: s.reservation_id,
                started_at: s.started_at,
                ended_at: s.ended_at,
                scheduled_at: reservation.scheduled_at,
                station_id: reservation.station_id,
                platform: platforms
                    .get(&reservation.station_id)
                    .cloned()
                    .unwrap_or_default(),
                client_names: names.remove(&s.reservation_id).unwrap_or_default(),
            })
        })
        .collect()
}
