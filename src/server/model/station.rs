//! Station domain models.
//!
//! A station is stored as a base row plus exactly one satellite row, but the rest of the
//! application only ever sees the [`StationKind`] sum type. The translation between the
//! two shapes lives in the station repository.

use std::fmt;

use sea_orm::DbErr;

use crate::model::station::{StationDto, StationPayloadDto};

/// Controller count assigned to a console when the request omits it.
pub const DEFAULT_CONTROLLER_COUNT: i32 = 2;
/// Inclusive bounds for the number of controllers at a console station.
pub const CONTROLLER_RANGE: std::ops::RangeInclusive<i32> = 1..=8;

/// Station discriminant as stored in `station.platform`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Pc,
    Console,
}

impl Platform {
    /// Every platform, in the order they are reported.
    pub const ALL: [Platform; 2] = [Platform::Pc, Platform::Console];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::Console => "Console",
        }
    }

    /// Parses the exact stored spelling, `"PC"` or `"Console"`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PC" => Some(Self::Pc),
            "Console" => Some(Self::Console),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific data of a station.
#[derive(Debug, Clone, PartialEq)]
pub enum StationKind {
    /// PC desk with a free-text hardware configuration, possibly empty.
    Pc { config: String },
    /// Console area with 1 to 8 controllers.
    Console { controllers: i32 },
}

impl StationKind {
    pub fn platform(&self) -> Platform {
        match self {
            Self::Pc { .. } => Platform::Pc,
            Self::Console { .. } => Platform::Console,
        }
    }
}

/// Station joined with its satellite data and reservation count.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: i32,
    pub kind: StationKind,
    pub reservation_count: u64,
}

impl Station {
    /// Converts a base row and its satellite rows to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `base` - Row from the `station` table
    /// - `pc` - Matching `station_pc` row, if any
    /// - `console` - Matching `station_console` row, if any
    /// - `reservation_count` - Number of reservations referencing the station
    ///
    /// # Returns
    /// - `Ok(Station)` - The satellite present matches the stored platform
    /// - `Err(DbErr::Custom)` - Unknown platform, or the satellite rows disagree with it
    pub fn from_entity(
        base: entity::station::Model,
        pc: Option<entity::station_pc::Model>,
        console: Option<entity::station_console::Model>,
        reservation_count: u64,
    ) -> Result<Self, DbErr> {
        let platform = Platform::parse(&base.platform).ok_or_else(|| {
            DbErr::Custom(format!(
                "Station {} has unknown platform '{}'",
                base.id, base.platform
            ))
        })?;

        let kind = match (platform, pc, console) {
            (Platform::Pc, Some(pc), None) => StationKind::Pc { config: pc.config },
            (Platform::Console, None, Some(console)) => StationKind::Console {
                controllers: console.controller_count,
            },
            (platform, pc, console) => {
                return Err(DbErr::Custom(format!(
                    "Station {} ({}) has inconsistent satellite rows (pc: {}, console: {})",
                    base.id,
                    platform,
                    pc.is_some(),
                    console.is_some()
                )))
            }
        };

        Ok(Self {
            id: base.id,
            kind,
            reservation_count,
        })
    }

    pub fn into_dto(self) -> StationDto {
        let platform = self.kind.platform();
        let (config_pc, nombre_manettes) = match self.kind {
            StationKind::Pc { config } => (Some(config), None),
            StationKind::Console { controllers } => (None, Some(controllers)),
        };

        StationDto {
            id_station: self.id,
            plateforme: platform.to_string(),
            config_pc,
            nombre_manettes,
            total_reservations: self.reservation_count,
        }
    }
}

/// Unvalidated station input as received from the API.
#[derive(Debug, Clone, Default)]
pub struct StationParams {
    pub platform: String,
    pub config: Option<String>,
    pub controllers: Option<i64>,
}

impl StationParams {
    pub fn from_dto(dto: StationPayloadDto) -> Self {
        Self {
            platform: dto.plateforme,
            config: dto.config_pc,
            controllers: dto.nombre_manettes,
        }
    }
}

/// Per-platform station and reservation tallies.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformTally {
    pub platform: Platform,
    pub stations: u64,
    pub reservations: u64,
}
