//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep storage details out of the business logic layer. Operations that
//! touch more than one table run inside a single transaction owned by the repository
//! method, so callers never observe partial writes.

pub mod admin;
pub mod client;
pub mod dashboard;
pub mod reservation;
pub mod session;
pub mod station;

#[cfg(test)]
mod test;
