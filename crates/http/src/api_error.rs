//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into HTTP responses with a JSON body and status code.
//! Handlers return `Result<Json<T>, ApiError>` so the caller sees the same
//! message the validation layer produced.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sandwich_map_service::ServiceError;
use sandwich_map_storage::StorageError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` logs the real error server-side and returns a static message
/// to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input from caller.
    BadRequest(String),
    /// 404 Not Found: requested resource doesn't exist.
    NotFound(String),
    /// 422 Unprocessable Entity: valid syntax but semantic rejection (e.g., duplicate).
    UnprocessableEntity(String),
    /// 500 Internal Server Error: unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Storage(ref e) if e.is_duplicate() => {
                Self::UnprocessableEntity(e.to_string())
            },
            ServiceError::Storage(ref e @ StorageError::NotFound { .. }) => {
                Self::NotFound(e.to_string())
            },
            ServiceError::Core(e) => Self::BadRequest(e.to_string()),
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            ServiceError::Storage(_) => Self::Internal(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use sandwich_map_core::CoreError;

    use super::*;

    fn status_of(err: ServiceError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn test_validation_errors_are_bad_request() {
        assert_eq!(status_of(CoreError::NonPositivePrice.into()), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(ServiceError::InvalidInput("No data provided".to_owned())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_duplicate_is_unprocessable() {
        let err = StorageError::DuplicateVendor("x".to_owned());
        assert_eq!(status_of(err.into()), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_storage_not_found_is_404() {
        let err = StorageError::NotFound { entity: "price", id: "abc".to_owned() };
        assert_eq!(status_of(err.into()), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_corrupt_row_is_internal() {
        let err = StorageError::CorruptRow {
            column: "count",
            detail: "negative row count -1".to_owned(),
        };
        assert_eq!(status_of(err.into()), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
