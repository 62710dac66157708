//! API data transfer objects.
//!
//! Wire types exchanged with the admin dashboard. Field names follow the JSON contract the
//! dashboard consumes (`id_station`, `plateforme`, `date_reservation`, ...), which is why
//! most structs here do not use Rust naming on the wire.

pub mod api;
pub mod auth;
pub mod client;
pub mod dashboard;
pub mod reservation;
pub mod session;
pub mod station;
