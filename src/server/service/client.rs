use sea_orm::DatabaseConnection;

use crate::server::{
    data::client::ClientRepository,
    error::{validation::ValidationError, AppError},
    model::client::{Client, ClientParams},
    service::auth::normalize_email,
    util::{
        db::{is_foreign_key_violation, is_unique_violation},
        parse::is_plausible_email,
    },
};

pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all clients ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Client>, AppError> {
        Ok(ClientRepository::new(self.db).get_all().await?)
    }

    /// Gets a client by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Client, AppError> {
        ClientRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(client_not_found)
    }

    /// Validates input and creates a client.
    ///
    /// # Returns
    /// - `Ok(Client)` - Created client
    /// - `Err(AppError::Validation)` - Empty name or implausible email
    /// - `Err(AppError::Conflict)` - Email already used by another client
    pub async fn create(&self, params: ClientParams) -> Result<Client, AppError> {
        let params = validate(params)?;
        let repo = ClientRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(email_taken());
        }

        let client = repo.create(params).await.map_err(|err| {
            if is_unique_violation(&err) {
                email_taken()
            } else {
                err.into()
            }
        })?;

        tracing::info!("Created client {}", client.id);

        Ok(client)
    }

    /// Validates input and replaces a client's fields.
    pub async fn update(&self, id: i32, params: ClientParams) -> Result<Client, AppError> {
        let params = validate(params)?;
        let repo = ClientRepository::new(self.db);

        if let Some(other) = repo.find_by_email(&params.email).await? {
            if other.id != id {
                return Err(email_taken());
            }
        }

        repo.update(id, params)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    email_taken()
                } else {
                    err.into()
                }
            })?
            .ok_or_else(client_not_found)
    }

    /// Deletes a client that no reservation references.
    ///
    /// # Returns
    /// - `Ok(())` - Client deleted
    /// - `Err(AppError::NotFound)` - No client with this ID
    /// - `Err(AppError::Conflict)` - Client is attached to at least one reservation
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ClientRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(client_not_found());
        }

        if repo.is_referenced(id).await? {
            return Err(client_in_use());
        }

        match repo.delete(id).await {
            Ok(true) => {
                tracing::info!("Deleted client {}", id);
                Ok(())
            }
            Ok(false) => Err(client_not_found()),
            Err(err) if is_foreign_key_violation(&err) => Err(client_in_use()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Trims names, normalizes the email and drops a blank phone number.
pub fn validate(params: ClientParams) -> Result<ClientParams, ValidationError> {
    let last_name = params.last_name.trim().to_string();
    let first_name = params.first_name.trim().to_string();
    let email = normalize_email(&params.email);
    let phone = params
        .phone
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty());

    let mut errors = ValidationError::new();
    if last_name.is_empty() {
        errors.push("nom", "Last name is required");
    }
    if first_name.is_empty() {
        errors.push("prenom", "First name is required");
    }
    if !is_plausible_email(&email) {
        errors.push("email", "A valid email address is required");
    }
    errors.into_result()?;

    Ok(ClientParams {
        last_name,
        first_name,
        email,
        phone,
    })
}

fn client_not_found() -> AppError {
    AppError::NotFound("Client not found".to_string())
}

fn email_taken() -> AppError {
    AppError::Conflict("A client with this email already exists".to_string())
}

fn client_in_use() -> AppError {
    AppError::Conflict("Client has reservations and cannot be deleted".to_string())
}
