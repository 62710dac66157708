use crate::server::{data::client::ClientRepository, model::client::ClientParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_missing;
mod get_all;
mod update;

fn params(email: &str) -> ClientParams {
    ClientParams {
        last_name: "Lovelace".to_string(),
        first_name: "Ada".to_string(),
        email: email.to_string(),
        phone: Some("0600000000".to_string()),
    }
}
