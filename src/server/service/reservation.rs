use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        client::ClientRepository,
        reservation::{ReservationDeletion, ReservationRepository},
        station::StationRepository,
    },
    error::{validation::ValidationError, AppError},
    model::reservation::{CreateReservationParams, NewReservation, Reservation},
    util::parse::parse_datetime,
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates input and books a station for a set of clients.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Reservation created with one association per distinct client
    /// - `Err(AppError::Validation)` - Unparseable time or empty client list
    /// - `Err(AppError::NotFound)` - Unknown station or client
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, AppError> {
        let params = validate(params)?;

        if !StationRepository::new(self.db)
            .exists(params.station_id)
            .await?
        {
            return Err(AppError::NotFound("Station not found".to_string()));
        }

        let missing = ClientRepository::new(self.db)
            .find_missing(&params.client_ids)
            .await?;
        if !missing.is_empty() {
            let ids: Vec<String> = missing.iter().map(ToString::to_string).collect();
            return Err(AppError::NotFound(format!(
                "Clients not found: {}",
                ids.join(", ")
            )));
        }

        let reservation = ReservationRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Created reservation {} on station {} for {} client(s)",
            reservation.id,
            reservation.station_id,
            reservation.client_names.len()
        );

        Ok(reservation)
    }

    /// Gets all reservations, latest scheduled first.
    pub async fn get_all(&self) -> Result<Vec<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db).get_all().await?)
    }

    /// Gets a reservation by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Reservation, AppError> {
        ReservationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(reservation_not_found)
    }

    /// Deletes a reservation, its client associations and a closed session.
    ///
    /// # Returns
    /// - `Ok(())` - Reservation deleted
    /// - `Err(AppError::NotFound)` - No reservation with this ID
    /// - `Err(AppError::Conflict)` - The reservation's session is still in progress
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        match ReservationRepository::new(self.db).delete(id).await? {
            ReservationDeletion::Deleted => {
                tracing::info!("Deleted reservation {}", id);
                Ok(())
            }
            ReservationDeletion::NotFound => Err(reservation_not_found()),
            ReservationDeletion::SessionActive => Err(AppError::Conflict(
                "Reservation has a session in progress; end it before deleting".to_string(),
            )),
        }
    }
}

/// Parses the scheduled time and collapses duplicate client IDs, keeping first occurrence.
pub fn validate(params: CreateReservationParams) -> Result<NewReservation, ValidationError> {
    let mut errors = ValidationError::new();

    let scheduled_at = parse_datetime(&params.scheduled_at);
    if scheduled_at.is_none() {
        errors.push(
            "date_reservation",
            "Expected a date and time such as 2025-06-01T18:00",
        );
    }

    let mut client_ids: Vec<i32> = Vec::with_capacity(params.client_ids.len());
    for id in params.client_ids {
        if !client_ids.contains(&id) {
            client_ids.push(id);
        }
    }
    if client_ids.is_empty() {
        errors.push("client_ids", "At least one client is required");
    }

    match scheduled_at {
        Some(scheduled_at) if errors.is_empty() => Ok(NewReservation {
            scheduled_at,
            station_id: params.station_id,
            client_ids,
        }),
        _ => Err(errors),
    }
}

fn reservation_not_found() -> AppError {
    AppError::NotFound("Reservation not found".to_string())
}
