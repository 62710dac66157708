use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub scheduled_at: DateTimeUtc,
    pub station_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::station::Entity",
        from = "Column::StationId",
        to = "super::station::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Station,
    #[sea_orm(has_many = "super::reservation_client::Entity")]
    ReservationClient,
    #[sea_orm(has_one = "super::play_session::Entity")]
    PlaySession,
}

impl Related<super::station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Station.def()
    }
}

impl Related<super::reservation_client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservationClient.def()
    }
}

impl Related<super::play_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlaySession.def()
    }
}

// Many-to-many relationship with clients
impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        super::reservation_client::Relation::Client.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::reservation_client::Relation::Reservation.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
