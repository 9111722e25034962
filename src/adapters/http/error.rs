//! Shared HTTP error payload and status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::ErrorCode;

/// JSON error body returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }
}

/// Maps an engine error code to an HTTP status.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::InvalidDuration => StatusCode::BAD_REQUEST,
        ErrorCode::EventNotFound => StatusCode::NOT_FOUND,
        ErrorCode::AlreadyActive
        | ErrorCode::SessionNotActive
        | ErrorCode::AlreadyJoined
        | ErrorCode::NotParticipating
        | ErrorCode::AlreadyRegistered
        | ErrorCode::NotRegistered => StatusCode::CONFLICT,
        ErrorCode::Unauthorized => StatusCode::FORBIDDEN,
        ErrorCode::StorageError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Builds the error response for an engine error.
pub fn error_response(code: ErrorCode, message: impl Into<String>) -> Response {
    (status_for(code), Json(ErrorResponse::new(code, message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_codes_map_to_409() {
        assert_eq!(status_for(ErrorCode::AlreadyActive), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorCode::AlreadyJoined), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorCode::NotRegistered), StatusCode::CONFLICT);
    }

    #[test]
    fn lookup_and_authorization_codes_map_distinctly() {
        assert_eq!(status_for(ErrorCode::EventNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::Unauthorized), StatusCode::FORBIDDEN);
        assert_eq!(
            status_for(ErrorCode::StorageError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
