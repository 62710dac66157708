pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_admin_table;
mod m20250601_000002_create_client_table;
mod m20250601_000003_create_station_table;
mod m20250601_000004_create_station_pc_table;
mod m20250601_000005_create_station_console_table;
mod m20250601_000006_create_reservation_table;
mod m20250601_000007_create_reservation_client_table;
mod m20250601_000008_create_play_session_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_admin_table::Migration),
            Box::new(m20250601_000002_create_client_table::Migration),
            Box::new(m20250601_000003_create_station_table::Migration),
            Box::new(m20250601_000004_create_station_pc_table::Migration),
            Box::new(m20250601_000005_create_station_console_table::Migration),
            Box::new(m20250601_000006_create_reservation_table::Migration),
            Box::new(m20250601_000007_create_reservation_client_table::Migration),
            Box::new(m20250601_000008_create_play_session_table::Migration),
        ]
    }
}
