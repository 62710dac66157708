//! In-memory station rows as they would be read back from storage.

use chrono::Utc;

/// Base row for a station with the given id and platform discriminant.
pub fn base(id: i32, platform: &str) -> entity::station::Model {
    entity::station::Model {
        id,
        platform: platform.to_string(),
        created_at: Utc::now(),
    }
}

/// PC satellite row for the given station id.
pub fn pc(station_id: i32, config: &str) -> entity::station_pc::Model {
    entity::station_pc::Model {
        station_id,
        config: config.to_string(),
    }
}

/// Console satellite row for the given station id.
pub fn console(station_id: i32, controller_count: i32) -> entity::station_console::Model {
    entity::station_console::Model {
        station_id,
        controller_count,
    }
}
