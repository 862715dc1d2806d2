use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::tabung::errors::TabungError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_body, repository_failure};

impl IntoErrorResponse for TabungError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            TabungError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "tabung.name_empty",
            ),
            TabungError::InvalidPeriod => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "tabung.invalid_period",
            ),
            TabungError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "tabung.not_found"),
            TabungError::TabungTypeNotFound => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ReferenceError",
                "tabung.tabung_type_not_found",
            ),
            TabungError::Repository(err) => repository_failure(err),
        };

        (status, error_body(name, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_missing_tabung_type_as_unprocessable() {
        let (status, body) = TabungError::TabungTypeNotFound.into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.0.name, "ReferenceError");
    }

    #[test]
    fn should_report_reversed_period_as_validation_error() {
        let (status, body) = TabungError::InvalidPeriod.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.message, "tabung.invalid_period");
    }
}
