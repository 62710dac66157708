use crate::server::{data::dashboard::DashboardRepository, model::station::Platform};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod counts;
mod platform_tallies;
