//! Business logic layer.
//!
//! Services validate input, enforce lifecycle rules and translate storage failures into
//! `AppError`s. Each service borrows the database connection for the duration of one
//! request and delegates persistence to the matching repository.

pub mod auth;
pub mod client;
pub mod dashboard;
pub mod reservation;
pub mod session;
pub mod station;

#[cfg(test)]
mod test;
