use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QuerySelect, RelationTrait, prelude::Expr, sea_query::ExprTrait,
};

use crate::server::model::station::{Platform, PlatformTally};

/// Row counts backing the dashboard, one `COUNT` query each.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCounts {
    pub total_clients: u64,
    pub total_stations: u64,
    pub total_reservations: u64,
    pub active_sessions: u64,
    pub today_reservations: u64,
    pub today_sessions: u64,
}

pub struct DashboardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts rows across all tables.
    ///
    /// # Arguments
    /// - `day_start` - Inclusive start of the day used for "today" counts
    /// - `day_end` - Exclusive end of that day
    pub async fn counts(
        &self,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> Result<DashboardCounts, DbErr> {
        let total_clients = entity::prelude::Client::find().count(self.db).await?;
        let total_stations = entity::prelude::Station::find().count(self.db).await?;
        let total_reservations = entity::prelude::Reservation::find().count(self.db).await?;

        let active_sessions = entity::prelude::PlaySession::find()
            .filter(entity::play_session::Column::EndedAt.is_null())
            .count(self.db)
            .await?;

        let today_reservations = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ScheduledAt.gte(day_start))
            .filter(entity::reservation::Column::ScheduledAt.lt(day_end))
            .count(self.db)
            .await?;

        let today_sessions = entity::prelude::PlaySession::find()
            .filter(entity::play_session::Column::StartedAt.gte(day_start))
            .filter(entity::play_session::Column::StartedAt.lt(day_end))
            .count(self.db)
            .await?;

        Ok(DashboardCounts {
            total_clients,
            total_stations,
            total_reservations,
            active_sessions,
            today_reservations,
            today_sessions,
        })
    }

    /// Station and reservation tallies for every platform, PC first.
    ///
    /// Platforms without stations are still reported with zero counts.
    pub async fn platform_tallies(&self) -> Result<Vec<PlatformTally>, DbErr> {
        let stations = group_counts(
            entity::prelude::Station::find()
                .select_only()
                .column(entity::station::Column::Platform)
                .column_as(
                    Expr::col((entity::station::Entity, entity::station::Column::Id)).count(),
                    "n",
                )
                .group_by(entity::station::Column::Platform)
                .into_tuple()
                .all(self.db)
                .await?,
        );

        let reservations = group_counts(
            entity::prelude::Reservation::find()
                .join(
                    JoinType::InnerJoin,
                    entity::reservation::Relation::Station.def(),
                )
                .select_only()
                .column(entity::station::Column::Platform)
                .column_as(
                    Expr::col((entity::reservation::Entity, entity::reservation::Column::Id))
                        .count(),
                    "n",
                )
                .group_by(entity::station::Column::Platform)
                .into_tuple()
                .all(self.db)
                .await?,
        );

        Ok(Platform::ALL
            .iter()
            .map(|&platform| PlatformTally {
                platform,
                stations: stations.get(&platform).copied().unwrap_or(0),
                reservations: reservations.get(&platform).copied().unwrap_or(0),
            })
            .collect())
    }
}

/// Keys `GROUP BY platform` rows by platform, dropping unrecognised values.
fn group_counts(rows: Vec<(String, i64)>) -> HashMap<Platform, u64> {
    rows.into_iter()
        .filter_map(|(platform, n)| Some((Platform::parse(&platform)?, n as u64)))
        .collect()
}
