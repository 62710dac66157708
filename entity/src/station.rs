use sea_orm::entity::prelude::*;

/// Base row of a gaming station.
///
/// `platform` is the discriminant ("PC" or "Console") selecting which satellite
/// table holds the variant-specific data.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "station")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub platform: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::station_pc::Entity")]
    StationPc,
    #[sea_orm(has_one = "super::station_console::Entity")]
    StationConsole,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
}

impl Related<super::station_pc::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StationPc.def()
    }
}

impl Related<super::station_console::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StationConsole.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
