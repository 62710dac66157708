use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{reservation::ReservationRepository, session::SessionRepository},
    error::AppError,
    model::session::{state_of, Session, SessionState},
    util::db::is_unique_violation,
};

pub struct SessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all sessions, most recently started first.
    pub async fn get_all(&self) -> Result<Vec<Session>, AppError> {
        Ok(SessionRepository::new(self.db).get_all().await?)
    }

    /// Starts the session of a reservation (`NoSession → Active`).
    ///
    /// # Returns
    /// - `Ok(Session)` - Session started now
    /// - `Err(AppError::NotFound)` - No reservation with this ID
    /// - `Err(AppError::Conflict)` - The reservation already has a session
    pub async fn start(&self, reservation_id: i32) -> Result<Session, AppError> {
        if ReservationRepository::new(self.db)
            .find_by_id(reservation_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Reservation not found".to_string()));
        }

        let repo = SessionRepository::new(self.db);

        let created = match repo.start(reservation_id, Utc::now()).await {
            Ok(Some(session)) => session,
            Ok(None) => return Err(already_started()),
            Err(err) if is_unique_violation(&err) => return Err(already_started()),
            Err(err) => return Err(err.into()),
        };

        tracing::info!(
            "Started session {} for reservation {}",
            created.id,
            reservation_id
        );

        self.load(created.id).await
    }

    /// Ends an active session (`Active → Closed`).
    ///
    /// The end time is never earlier than the start time, even if the clock moved back.
    ///
    /// # Returns
    /// - `Ok(Session)` - Session closed now
    /// - `Err(AppError::NotFound)` - No session with this ID
    /// - `Err(AppError::Conflict)` - The session was already closed
    pub async fn end(&self, id: i32) -> Result<Session, AppError> {
        let repo = SessionRepository::new(self.db);

        let Some(session) = repo.find_by_id(id).await? else {
            return Err(session_not_found());
        };

        if state_of(session.ended_at) == SessionState::Closed {
            return Err(already_ended());
        }

        let ended_at = Utc::now().max(session.started_at);

        if !repo.end(id, ended_at).await? {
            return Err(missed_end(&repo, id).await);
        }

        tracing::info!("Ended session {}", id);

        self.load(id).await
    }

    /// Deletes a session in any state, letting its reservation start a new one.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !SessionRepository::new(self.db).delete(id).await? {
            return Err(session_not_found());
        }

        tracing::info!("Deleted session {}", id);

        Ok(())
    }

    async fn load(&self, id: i32) -> Result<Session, AppError> {
        SessionRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Session {} vanished after write", id)))
    }
}

/// Classifies a conditional end that matched no row: the session was either deleted
/// or ended by another request since it was read.
pub(super) async fn missed_end(repo: &SessionRepository<'_>, id: i32) -> AppError {
    match repo.find_by_id(id).await {
        Ok(Some(_)) => already_ended(),
        Ok(None) => session_not_found(),
        Err(err) => err.into(),
    }
}

fn session_not_found() -> AppError {
    AppError::NotFound("Session not found".to_string())
}

fn already_started() -> AppError {
    AppError::Conflict("A session has already been started for this reservation".to_string())
}

fn already_ended() -> AppError {
    AppError::Conflict("Session has already ended".to_string())
}
