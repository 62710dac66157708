use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{FieldErrorDto, ValidationErrorDto};

/// One rejected input field with a human readable reason.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Input rejected before any write was attempted.
///
/// Collects every failing field so the dashboard can highlight all of them at once.
#[derive(Error, Debug, Default)]
#[error("Validation failed: {}", summary(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} ({})", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error for a single field.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.push(field, message);
        err
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `Err(self)` when at least one field was rejected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Whether a given field was rejected.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorDto {
                error: "Validation failed".to_string(),
                errors: self
                    .errors
                    .into_iter()
                    .map(|e| FieldErrorDto {
                        field: e.field,
                        message: e.message,
                    })
                    .collect(),
            }),
        )
            .into_response()
    }
}
