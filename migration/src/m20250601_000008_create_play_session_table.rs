use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000006_create_reservation_table::Reservation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlaySession::Table)
                    .if_not_exists()
                    .col(pk_auto(PlaySession::Id))
                    // One session per reservation, enforced by the store so that two
                    // concurrent starts cannot both succeed.
                    .col(integer_uniq(PlaySession::ReservationId))
                    .col(timestamp_with_time_zone(PlaySession::StartedAt))
                    .col(timestamp_with_time_zone_null(PlaySession::EndedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_play_session_reservation_id")
                            .from(PlaySession::Table, PlaySession::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_play_session_started_at")
                    .table(PlaySession::Table)
                    .col(PlaySession::StartedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlaySession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlaySession {
    Table,
    Id,
    ReservationId,
    StartedAt,
    EndedAt,
}
