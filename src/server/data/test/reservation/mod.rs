use crate::server::{
    data::reservation::{ReservationDeletion, ReservationRepository},
    model::reservation::NewReservation,
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
