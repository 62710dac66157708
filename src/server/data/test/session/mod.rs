use crate::server::data::session::SessionRepository;
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod end;
mod get_all;
mod start;
