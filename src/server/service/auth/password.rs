use crate::server::error::AppError;

/// Hashes a password with bcrypt at the default cost.
pub fn hash(password: &str) -> Result<String, AppError> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

/// Checks a password against a stored bcrypt hash.
pub fn verify(password: &str, hash: &str) -> Result<bool, AppError> {
    Ok(bcrypt::verify(password, hash)?)
}
