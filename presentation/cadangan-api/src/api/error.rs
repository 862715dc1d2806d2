use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;

pub use api_core::error::ErrorResponse;

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub fn repository_failure(err: &RepositoryError) -> (StatusCode, &'static str, &'static str) {
    match err {
        RepositoryError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "repository.not_found"),
        RepositoryError::Duplicated => (StatusCode::CONFLICT, "Conflict", "repository.duplicated"),
        RepositoryError::Conflict => (StatusCode::CONFLICT, "Conflict", "repository.conflict"),
        RepositoryError::DatabaseError => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "InternalError",
            "repository.persistence",
        ),
    }
}

pub fn error_body(name: &str, message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(name, message))
}
