//! Admin authentication: login, token verification and startup provisioning.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::admin::AdminRepository,
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::admin::{Admin, CreateAdminParams},
    service::auth::token::TokenService,
    util::parse::is_plausible_email,
};

/// Minimum password length accepted at login.
pub const MIN_PASSWORD_LENGTH: usize = 6;

const DEFAULT_ADMIN_LAST_NAME: &str = "Admin";
const DEFAULT_ADMIN_FIRST_NAME: &str = "GameZone";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Checks credentials and issues an access token.
    ///
    /// # Returns
    /// - `Ok((token, Admin))` - Credentials valid
    /// - `Err(AppError::Validation)` - Malformed email or password shorter than 6 characters
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, Admin), AppError> {
        let email = normalize_email(email);

        let mut errors = ValidationError::new();
        if !is_plausible_email(&email) {
            errors.push("email", "A valid email address is required");
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
            );
        }
        errors.into_result()?;

        let repo = AdminRepository::new(self.db);

        let Some(admin) = repo.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify(password, &admin.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let admin = Admin::from_entity(admin);
        let token = self.tokens.issue(&admin)?;

        tracing::info!("Admin {} logged in", admin.email);

        Ok((token, admin))
    }

    /// Resolves a bearer token to the admin it was issued for.
    ///
    /// # Returns
    /// - `Ok(Admin)` - Token valid and the admin still exists
    /// - `Err(AppError::AuthErr(InvalidToken))` - Bad signature, malformed or expired token
    /// - `Err(AppError::AuthErr(AdminNotFound))` - Admin deleted since the token was issued
    pub async fn authenticate(&self, token: &str) -> Result<Admin, AppError> {
        let claims = self.tokens.verify(token)?;

        let repo = AdminRepository::new(self.db);

        let Some(admin) = repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::AdminNotFound(claims.sub).into());
        };

        Ok(Admin::from_entity(admin))
    }

    /// Creates the admin account if no admin with this email exists yet.
    ///
    /// # Returns
    /// - `Ok(Some(Admin))` - A new admin was created
    /// - `Ok(None)` - The admin already existed; nothing changed
    pub async fn provision_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Admin>, AppError> {
        let email = normalize_email(email);
        let repo = AdminRepository::new(self.db);

        if repo.find_by_email(&email).await?.is_some() {
            return Ok(None);
        }

        let admin = repo
            .create(CreateAdminParams {
                email,
                password_hash: password::hash(password)?,
                last_name: DEFAULT_ADMIN_LAST_NAME.to_string(),
                first_name: DEFAULT_ADMIN_FIRST_NAME.to_string(),
            })
            .await?;

        Ok(Some(Admin::from_entity(admin)))
    }
}

/// Trims and lowercases an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
