use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::tabung_type::errors::TabungTypeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_body, repository_failure};

impl IntoErrorResponse for TabungTypeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            TabungTypeError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "tabung_type.name_empty",
            ),
            TabungTypeError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "tabung_type.not_found")
            }
            TabungTypeError::InUse => (StatusCode::CONFLICT, "Conflict", "tabung_type.in_use"),
            TabungTypeError::Repository(err) => repository_failure(err),
        };

        (status, error_body(name, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_refuse_deleting_type_in_use_with_conflict() {
        let (status, body) = TabungTypeError::InUse.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.0.message, "tabung_type.in_use");
    }

    #[test]
    fn should_report_duplicate_name_as_conflict() {
        let (status, body) =
            TabungTypeError::Repository(RepositoryError::Duplicated).into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.0.message, "repository.duplicated");
    }
}
