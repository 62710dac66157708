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
                    .table(StationPc::Table)
                    .if_not_exists()
                    .col(integer(StationPc::StationId).primary_key())
                    .col(text(StationPc::Config))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_station_pc_station_id")
                            .from(StationPc::Table, StationPc::StationId)
                            .to(Station::Table, Station::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StationPc::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StationPc {
    Table,
    StationId,
    Config,
}
