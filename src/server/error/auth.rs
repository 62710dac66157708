use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on a protected request.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Token failed signature, format, or expiry validation.
    #[error("Rejected token: {0}")]
    InvalidToken(String),

    /// Token is valid but the admin it names no longer exists.
    #[error("Admin {0} from token not found in database")]
    AdminNotFound(i32),

    /// Unknown email or wrong password at login.
    ///
    /// Both cases share this variant so the response does not reveal which emails exist.
    #[error("Invalid login credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant results in 401 Unauthorized. The detailed reason is logged at debug
/// level while the client only sees one of two generic messages:
/// - `InvalidCredentials` → "Invalid credentials"
/// - Other errors → "Authentication required"
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::InvalidCredentials => "Invalid credentials",
            Self::MissingToken | Self::InvalidToken(_) | Self::AdminNotFound(_) => {
                "Authentication required"
            }
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
