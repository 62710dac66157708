//! SeaORM entity definitions for the gaming center schema.
//!
//! A station is stored as a base `station` row plus exactly one satellite row in either
//! `station_pc` or `station_console`. Reservations link a station to clients through the
//! `reservation_client` join table, and each reservation owns at most one `play_session`.

pub mod prelude;

pub mod admin;
pub mod client;
pub mod play_session;
pub mod reservation;
pub mod reservation_client;
pub mod station;
pub mod station_console;
pub mod station_pc;
