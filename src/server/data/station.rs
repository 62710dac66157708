//! Station repository.
//!
//! This is the only place that knows a station is split across `station`, `station_pc`
//! and `station_console`. Writes touching the satellite tables run in one transaction.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
    prelude::Expr, sea_query::ExprTrait,
};

use crate::server::model::station::{Station, StationKind};

pub struct StationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a station base row and its satellite row atomically.
    ///
    /// # Arguments
    /// - `kind` - Validated variant data; selects which satellite table is written
    ///
    /// # Returns
    /// - `Ok(Station)` - Created station with a reservation count of 0
    /// - `Err(DbErr)` - Either insert failed; nothing was persisted
    pub async fn create(&self, kind: StationKind) -> Result<Station, DbErr> {
        let txn = self.db.begin().await?;

        let base = entity::station::ActiveModel {
            platform: ActiveValue::Set(kind.platform().as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_satellite(&txn, base.id, &kind).await?;

        txn.commit().await?;

        Ok(Station {
            id: base.id,
            kind,
            reservation_count: 0,
        })
    }

    /// Gets a station by ID joined with its satellite row and reservation count.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Station>, DbErr> {
        load_station(self.db, id).await
    }

    /// Gets all stations ordered by ID, joined with satellite rows and reservation counts.
    pub async fn get_all(&self) -> Result<Vec<Station>, DbErr> {
        let bases = entity::prelude::Station::find()
            .order_by_asc(entity::station::Column::Id)
            .all(self.db)
            .await?;

        let mut pcs: HashMap<i32, entity::station_pc::Model> = entity::prelude::StationPc::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(|pc| (pc.station_id, pc))
            .collect();

        let mut consoles: HashMap<i32, entity::station_console::Model> =
            entity::prelude::StationConsole::find()
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.station_id, c))
                .collect();

        let counts = self.reservation_counts().await?;

        bases
            .into_iter()
            .map(|base| {
                let id = base.id;
                Station::from_entity(
                    base,
                    pcs.remove(&id),
                    consoles.remove(&id),
                    counts.get(&id).copied().unwrap_or(0),
                )
            })
            .collect()
    }

    /// Replaces a station's platform and satellite data atomically.
    ///
    /// Satellite rows are removed from both tables before the new one is inserted, so a
    /// platform flip never leaves the previous variant's data behind.
    ///
    /// # Returns
    /// - `Ok(Some(Station))` - Updated station
    /// - `Ok(None)` - No station with this ID; nothing was written
    /// - `Err(DbErr)` - A write failed; the transaction was rolled back
    pub async fn update(&self, id: i32, kind: StationKind) -> Result<Option<Station>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(base) = entity::prelude::Station::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: entity::station::ActiveModel = base.into();
        active.platform = ActiveValue::Set(kind.platform().as_str().to_string());
        active.update(&txn).await?;

        entity::prelude::StationPc::delete_many()
            .filter(entity::station_pc::Column::StationId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::StationConsole::delete_many()
            .filter(entity::station_console::Column::StationId.eq(id))
            .exec(&txn)
            .await?;

        insert_satellite(&txn, id, &kind).await?;

        let reservation_count = count_reservations(&txn, id).await?;

        txn.commit().await?;

        Ok(Some(Station {
            id,
            kind,
            reservation_count,
        }))
    }

    /// Deletes a station together with its satellite row.
    ///
    /// Satellites are removed explicitly in the same transaction rather than relying on
    /// the backend honoring `ON DELETE CASCADE`.
    ///
    /// # Returns
    /// - `Ok(true)` - Station deleted
    /// - `Ok(false)` - No station with this ID
    /// - `Err(DbErr)` - Database error, including a foreign key violation when
    ///   reservations still reference the station
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::StationPc::delete_many()
            .filter(entity::station_pc::Column::StationId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::StationConsole::delete_many()
            .filter(entity::station_console::Column::StationId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Station::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            return Ok(false);
        }

        txn.commit().await?;

        Ok(true)
    }

    /// Whether a station with this ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Station::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Number of reservations referencing this station.
    pub async fn reservation_count(&self, id: i32) -> Result<u64, DbErr> {
        count_reservations(self.db, id).await
    }

    /// Number of reservations per station ID, counted with `GROUP BY station_id`.
    async fn reservation_counts(&self) -> Result<HashMap<i32, u64>, DbErr> {
        let rows: Vec<(i32, i64)> = entity::prelude::Reservation::find()
            .select_only()
            .column(entity::reservation::Column::StationId)
            .column_as(Expr::col(entity::reservation::Column::Id).count(), "n")
            .group_by(entity::reservation::Column::StationId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(station_id, n)| (station_id, n as u64))
            .collect())
    }
}

/// Writes the satellite row matching `kind` for an existing base row.
async fn insert_satellite<C: ConnectionTrait>(
    conn: &C,
    station_id: i32,
    kind: &StationKind,
) -> Result<(), DbErr> {
    match kind {
        StationKind::Pc { config } => {
            entity::station_pc::ActiveModel {
                station_id: ActiveValue::Set(station_id),
                config: ActiveValue::Set(config.clone()),
            }
            .insert(conn)
            .await?;
        }
        StationKind::Console { controllers } => {
            entity::station_console::ActiveModel {
                station_id: ActiveValue::Set(station_id),
                controller_count: ActiveValue::Set(*controllers),
            }
            .insert(conn)
            .await?;
        }
    }

    Ok(())
}

async fn load_station<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<Station>, DbErr> {
    let Some(base) = entity::prelude::Station::find_by_id(id).one(conn).await? else {
        return Ok(None);
    };

    let pc = entity::prelude::StationPc::find_by_id(id).one(conn).await?;
    let console = entity::prelude::StationConsole::find_by_id(id)
        .one(conn)
        .await?;
    let reservation_count = count_reservations(conn, id).await?;

    Station::from_entity(base, pc, console, reservation_count).map(Some)
}

async fn count_reservations<C: ConnectionTrait>(conn: &C, station_id: i32) -> Result<u64, DbErr> {
    entity::prelude::Reservation::find()
        .filter(entity::reservation::Column::StationId.eq(station_id))
        .count(conn)
        .await
}
