use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// A single rejected input field.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// Body returned with 400 responses caused by invalid input.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ValidationErrorDto {
    pub error: String,
    pub errors: Vec<FieldErrorDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
