use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000002_create_client_table::Client,
    m20250601_000006_create_reservation_table::Reservation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReservationClient::Table)
                    .if_not_exists()
                    .col(integer(ReservationClient::ReservationId))
                    .col(integer(ReservationClient::ClientId))
                    .primary_key(
                        Index::create()
                            .col(ReservationClient::ReservationId)
                            .col(ReservationClient::ClientId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_client_reservation_id")
                            .from(ReservationClient::Table, ReservationClient::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_client_client_id")
                            .from(ReservationClient::Table, ReservationClient::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReservationClient::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReservationClient {
    Table,
    ReservationId,
    ClientId,
}
