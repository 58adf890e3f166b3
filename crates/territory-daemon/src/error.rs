//! Error types for territory-daemon

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::PathBuf;
use territory_registry::RegistryError;
use territory_types::{DistributorName, LocationError};
use thiserror::Error;

/// Daemon-level errors
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server startup error
    #[error("Server error: {0}")]
    Server(String),

    /// Seed file could not be read or parsed
    #[error("Seed file {path}: {reason}")]
    Seed { path: PathBuf, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// API-specific errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Access check without distributor or location
    #[error("Missing 'distributor' or 'location' parameter")]
    MissingParameters,

    /// Request body is not a valid create request
    #[error("Invalid JSON payload: {0}")]
    InvalidPayload(String),

    /// Location code rejected by strict parsing
    #[error("Malformed location code: {0}")]
    MalformedLocation(#[from] LocationError),

    /// No policy stored under the name
    #[error("Error: distributor does not exist: {0}")]
    UnknownDistributor(DistributorName),

    /// Derivation named a parent that is not stored
    #[error("Error: parent distributor {parent} does not exist")]
    UnknownParent { parent: DistributorName },

    /// Name already taken
    #[error("Error: distributor already exists: {0}")]
    Conflict(DistributorName),

    /// Method other than GET or POST on the access endpoint
    #[error("Only GET & POST methods are allowed")]
    MethodNotAllowed,
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownActor(name) => ApiError::UnknownDistributor(name),
            RegistryError::AlreadyExists { existing } => ApiError::Conflict(existing.name.clone()),
            RegistryError::ParentNotFound { parent, .. } => ApiError::UnknownParent { parent },
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::MissingParameters => (StatusCode::BAD_REQUEST, "MISSING_PARAMETERS"),
            ApiError::InvalidPayload(_) => (StatusCode::BAD_REQUEST, "INVALID_PAYLOAD"),
            ApiError::MalformedLocation(_) => (StatusCode::BAD_REQUEST, "MALFORMED_LOCATION"),
            ApiError::UnknownDistributor(_) => (StatusCode::NOT_FOUND, "UNKNOWN_DISTRIBUTOR"),
            ApiError::UnknownParent { .. } => (StatusCode::NOT_FOUND, "UNKNOWN_PARENT"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for daemon operations
pub type DaemonResult<T> = Result<T, DaemonError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use territory_types::Policy;

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::MissingParameters.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::UnknownDistributor(DistributorName::new("x"))
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::MethodNotAllowed.into_response().status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::MalformedLocation(LocationError::Empty)
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_registry_error_conversion() {
        let existing = Arc::new(Policy {
            name: DistributorName::new("taken"),
            include: Vec::new(),
            exclude: Vec::new(),
            parent_name: None,
        });
        let err: ApiError = RegistryError::AlreadyExists { existing }.into();
        assert!(matches!(err, ApiError::Conflict(ref name) if name.as_str() == "taken"));

        let err: ApiError = RegistryError::ParentNotFound {
            name: DistributorName::new("child"),
            parent: DistributorName::new("ghost"),
        }
        .into();
        assert_eq!(err.to_string(), "Error: parent distributor ghost does not exist");
    }
}
