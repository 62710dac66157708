//! Test fixtures providing entity models without database insertion.
//!
//! Unlike factories, fixtures never touch the database. Use them to exercise the
//! conversions from stored rows to domain models in plain unit tests.

pub mod station;
