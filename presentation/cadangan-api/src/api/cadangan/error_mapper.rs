use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cadangan::errors::CadanganError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_body, repository_failure};

impl IntoErrorResponse for CadanganError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CadanganError::ContentEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cadangan.content_empty",
            ),
            CadanganError::InvalidScore => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cadangan.invalid_score",
            ),
            CadanganError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "cadangan.not_found"),
            CadanganError::Repository(err) => repository_failure(err),
        };

        (status, error_body(name, message))
    }
}
