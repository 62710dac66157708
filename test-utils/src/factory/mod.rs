//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert directly through the entity layer, so they
//! bypass service validation and can be used to set up states the API would refuse.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let client = factory::create_client(&db).await?;
//!     let station = factory::create_pc_station(&db).await?;
//!
//!     // Create with all dependencies
//!     let (station, clients, reservation) =
//!         factory::helpers::create_reservation_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `admin` - Create admin accounts with a known password
//! - `client` - Create client entities
//! - `station` - Create PC or console stations (base + satellite rows)
//! - `reservation` - Create reservations with their client associations
//! - `play_session` - Create active or closed sessions
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod admin;
pub mod client;
pub mod helpers;
pub mod play_session;
pub mod reservation;
pub mod station;

pub use admin::create_admin;
pub use client::create_client;
pub use play_session::create_session;
pub use reservation::create_reservation;
pub use station::{create_console_station, create_pc_station};
