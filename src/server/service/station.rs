use sea_orm::DatabaseConnection;

use crate::server::{
    data::station::StationRepository,
    error::{validation::ValidationError, AppError},
    model::station::{
        Platform, Station, StationKind, StationParams, CONTROLLER_RANGE, DEFAULT_CONTROLLER_COUNT,
    },
    util::db::is_foreign_key_violation,
};

pub struct StationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates input and creates a station with its satellite row.
    pub async fn create(&self, params: StationParams) -> Result<Station, AppError> {
        let kind = validate(params)?;

        let station = StationRepository::new(self.db).create(kind).await?;

        tracing::info!("Created {} station {}", station.kind.platform(), station.id);

        Ok(station)
    }

    /// Gets a station by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Station, AppError> {
        StationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(station_not_found)
    }

    /// Gets all stations ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Station>, AppError> {
        Ok(StationRepository::new(self.db).get_all().await?)
    }

    /// Validates input and replaces the station's platform and satellite data.
    ///
    /// Validation runs before the station is looked up, so invalid input on a missing
    /// station reports the validation error.
    pub async fn update(&self, id: i32, params: StationParams) -> Result<Station, AppError> {
        let kind = validate(params)?;

        let station = StationRepository::new(self.db)
            .update(id, kind)
            .await?
            .ok_or_else(station_not_found)?;

        tracing::info!("Updated station {} to {}", id, station.kind.platform());

        Ok(station)
    }

    /// Deletes a station and its satellite row.
    ///
    /// # Returns
    /// - `Ok(())` - Station deleted
    /// - `Err(AppError::NotFound)` - No station with this ID
    /// - `Err(AppError::Conflict)` - Reservations still reference the station
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = StationRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(station_not_found());
        }

        if repo.reservation_count(id).await? > 0 {
            return Err(station_in_use());
        }

        match repo.delete(id).await {
            Ok(true) => {
                tracing::info!("Deleted station {}", id);
                Ok(())
            }
            Ok(false) => Err(station_not_found()),
            Err(err) if is_foreign_key_violation(&err) => Err(station_in_use()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Turns raw station input into a validated [`StationKind`].
///
/// - `platform` must be exactly `"PC"` or `"Console"`.
/// - PC: the configuration is trimmed and may be empty; a missing one becomes `""`.
/// - Console: the controller count defaults to 2 and must lie in 1..=8.
///
/// Fields belonging to the other platform are ignored.
pub fn validate(params: StationParams) -> Result<StationKind, ValidationError> {
    let Some(platform) = Platform::parse(&params.platform) else {
        return Err(ValidationError::single(
            "plateforme",
            "Platform must be PC or Console",
        ));
    };

    match platform {
        Platform::Pc => Ok(StationKind::Pc {
            config: params
                .config
                .map(|c| c.trim().to_string())
                .unwrap_or_default(),
        }),
        Platform::Console => {
            let controllers = match params.controllers {
                None => DEFAULT_CONTROLLER_COUNT,
                Some(n) => i32::try_from(n)
                    .ok()
                    .filter(|n| CONTROLLER_RANGE.contains(n))
                    .ok_or_else(|| {
                        ValidationError::single(
                            "nombre_manettes",
                            format!(
                                "Controller count must be between {} and {}",
                                CONTROLLER_RANGE.start(),
                                CONTROLLER_RANGE.end()
                            ),
                        )
                    })?,
            };

            Ok(StationKind::Console { controllers })
        }
    }
}

fn station_not_found() -> AppError {
    AppError::NotFound("Station not found".to_string())
}

fn station_in_use() -> AppError {
    AppError::Conflict("Station has reservations and cannot be deleted".to_string())
}
