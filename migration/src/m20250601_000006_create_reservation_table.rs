use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000003_create_station_table::Station;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(timestamp_with_time_zone(Reservation::ScheduledAt))
                    .col(integer(Reservation::StationId))
                    .col(
                        timestamp_with_time_zone(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_station_id")
                            .from(Reservation::Table, Reservation::StationId)
                            .to(Station::Table, Station::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_scheduled_at")
                    .table(Reservation::Table)
                    .col(Reservation::ScheduledAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    ScheduledAt,
    StationId,
    CreatedAt,
}
