//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and convenience methods for creating
//! entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to derive unique emails and names so that factory-created rows never
/// collide on unique constraints.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a reservation together with everything it depends on.
///
/// This is a convenience method that creates:
/// 1. A PC station
/// 2. Two clients
/// 3. A reservation one hour from now linking the station and both clients
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((station, clients, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::station::Model,
        Vec<entity::client::Model>,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let station = crate::factory::station::create_pc_station(db).await?;
    let first = crate::factory::client::create_client(db).await?;
    let second = crate::factory::client::create_client(db).await?;

    let reservation =
        crate::factory::reservation::create_reservation(db, station.id, &[first.id, second.id])
            .await?;

    Ok((station, vec![first, second], reservation))
}

/// Creates a reservation with dependencies and an active session for it.
///
/// # Returns
/// - `Ok((station, clients, reservation, session))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_session_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::station::Model,
        Vec<entity::client::Model>,
        entity::reservation::Model,
        entity::play_session::Model,
    ),
    DbErr,
> {
    let (station, clients, reservation) = create_reservation_with_dependencies(db).await?;
    let session = crate::factory::play_session::create_session(db, reservation.id).await?;

    Ok((station, clients, reservation, session))
}
