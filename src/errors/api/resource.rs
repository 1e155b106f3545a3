use crate::errors::internal::{InternalError, ItemError, PersonError};
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Standardized error response for resource endpoints
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Errors returned by the item, people and checkout endpoints
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// Request is missing a field or carries an invalid value
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Requested record, or a record it references, does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ApiError {
    pub fn item_not_found(id: i32) -> Self {
        ApiError::NotFound(Json(ErrorResponse {
            error: "item_not_found".to_string(),
            message: format!("Item not found: {}", id),
            status_code: 404,
        }))
    }

    pub fn person_not_found(id: i32) -> Self {
        ApiError::NotFound(Json(ErrorResponse {
            error: "person_not_found".to_string(),
            message: format!("Person not found: {}", id),
            status_code: 404,
        }))
    }

    pub fn validation_failed(field: &str, message: &str) -> Self {
        ApiError::BadRequest(Json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: format!("Invalid {}: {}", field, message),
            status_code: 400,
        }))
    }

    /// Request body or path could not be parsed before reaching a handler
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(Json(ErrorResponse {
            error: "invalid_request".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    /// Convert InternalError to ApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Infrastructure details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Database(_) => {
                tracing::error!("Database failure: {}", err);
                Self::internal_server_error()
            }
            InternalError::Validation { field, message } => {
                Self::validation_failed(field, message)
            }
            InternalError::Item(ItemError::NotFound(id)) => Self::item_not_found(*id),
            InternalError::Item(ItemError::PersonNotFound(person_id)) => {
                tracing::warn!("Rejected reference to unknown person {}", person_id);
                Self::person_not_found(*person_id)
            }
            InternalError::Person(PersonError::NotFound(id)) => Self::person_not_found(*id),
        }
    }

    /// Generic internal server error, never carrying internal details
    fn internal_server_error() -> Self {
        ApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    fn body(&self) -> &ErrorResponse {
        match self {
            ApiError::BadRequest(json) => &json.0,
            ApiError::NotFound(json) => &json.0,
            ApiError::InternalError(json) => &json.0,
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        self.body().message.clone()
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        self.body().status_code
    }
}

impl From<InternalError> for ApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
