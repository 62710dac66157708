use crate::server::{
    data::station::StationRepository,
    model::station::{Station, StationKind},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;

/// Counts satellite rows for a station in each satellite table.
async fn satellite_rows(db: &sea_orm::DatabaseConnection, id: i32) -> Result<(u64, u64), DbErr> {
    use sea_orm::{ColumnTrait, QueryFilter};

    let pcs = entity::prelude::StationPc::find()
        .filter(entity::station_pc::Column::StationId.eq(id))
        .count(db)
        .await?;
    let consoles = entity::prelude::StationConsole::find()
        .filter(entity::station_console::Column::StationId.eq(id))
        .count(db)
        .await?;

    Ok((pcs, consoles))
}
