use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Station, StationPc};
///
/// let test = TestBuilder::new()
///     .with_table(Station)
///     .with_table(StationPc)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including the foreign keys declared by its `belongs_to` relations.
    /// Tables should be added in dependency order (tables with foreign keys after the
    /// tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the admin table used by the authentication gate.
    pub fn with_admin_tables(self) -> Self {
        self.with_table(Admin)
    }

    /// Adds the station base table and both satellite tables.
    pub fn with_station_tables(self) -> Self {
        self.with_table(Station)
            .with_table(StationPc)
            .with_table(StationConsole)
    }

    /// Adds every table required for reservation operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Client
    /// - Station, StationPc, StationConsole
    /// - Reservation
    /// - ReservationClient
    pub fn with_reservation_tables(self) -> Self {
        self.with_table(Client)
            .with_station_tables()
            .with_table(Reservation)
            .with_table(ReservationClient)
    }

    /// Adds every table required for session operations.
    ///
    /// Equivalent to `with_reservation_tables()` followed by `with_table(PlaySession)`.
    pub fn with_session_tables(self) -> Self {
        self.with_reservation_tables().with_table(PlaySession)
    }

    /// Adds the complete schema, admin table included.
    pub fn with_all_tables(self) -> Self {
        self.with_admin_tables().with_session_tables()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
