use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation_client::Entity")]
    ReservationClient,
}

impl Related<super::reservation_client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservationClient.def()
    }
}

// Many-to-many relationship with reservations
impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        super::reservation_client::Relation::Reservation.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::reservation_client::Relation::Client.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
