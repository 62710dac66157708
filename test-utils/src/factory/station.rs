//! Station factory for creating base rows together with their satellite row.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a PC station with the given hardware configuration.
///
/// Inserts the `station` base row with platform `"PC"` and the matching
/// `station_pc` satellite row.
///
/// # Returns
/// - `Ok(entity::station::Model)` - Created base row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_pc_station_with_config(
    db: &DatabaseConnection,
    config: impl Into<String>,
) -> Result<entity::station::Model, DbErr> {
    let station = insert_base(db, "PC").await?;

    entity::station_pc::ActiveModel {
        station_id: ActiveValue::Set(station.id),
        config: ActiveValue::Set(config.into()),
    }
    .insert(db)
    .await?;

    Ok(station)
}

/// Creates a console station with the given controller count.
///
/// The count is written as-is, without the 1-8 range check performed by the service.
pub async fn create_console_station_with_controllers(
    db: &DatabaseConnection,
    controller_count: i32,
) -> Result<entity::station::Model, DbErr> {
    let station = insert_base(db, "Console").await?;

    entity::station_console::ActiveModel {
        station_id: ActiveValue::Set(station.id),
        controller_count: ActiveValue::Set(controller_count),
    }
    .insert(db)
    .await?;

    Ok(station)
}

/// Creates a PC station configured as `"i5, GTX1660"`.
pub async fn create_pc_station(db: &DatabaseConnection) -> Result<entity::station::Model, DbErr> {
    create_pc_station_with_config(db, "i5, GTX1660").await
}

/// Creates a console station with 2 controllers.
pub async fn create_console_station(
    db: &DatabaseConnection,
) -> Result<entity::station::Model, DbErr> {
    create_console_station_with_controllers(db, 2).await
}

async fn insert_base(
    db: &DatabaseConnection,
    platform: &str,
) -> Result<entity::station::Model, DbErr> {
    entity::station::ActiveModel {
        id: ActiveValue::NotSet,
        platform: ActiveValue::Set(platform.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn creates_pc_station_with_satellite() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_station_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let station = create_pc_station_with_config(db, "i9, RTX4090").await?;

        assert_eq!(station.platform, "PC");
        let satellite = entity::prelude::StationPc::find_by_id(station.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(satellite.config, "i9, RTX4090");
        assert!(entity::prelude::StationConsole::find_by_id(station.id)
            .one(db)
            .await?
            .is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_console_station_with_satellite() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_station_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let station = create_console_station(db).await?;

        assert_eq!(station.platform, "Console");
        let satellite = entity::prelude::StationConsole::find_by_id(station.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(satellite.controller_count, 2);

        Ok(())
    }
}
