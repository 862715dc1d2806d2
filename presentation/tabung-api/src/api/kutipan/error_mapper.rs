use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::kutipan::errors::KutipanError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_body, repository_failure};

impl IntoErrorResponse for KutipanError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            KutipanError::NegativeAmount => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "kutipan.negative_amount",
            ),
            KutipanError::InvalidRange => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "kutipan.invalid_range",
            ),
            KutipanError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "kutipan.not_found"),
            KutipanError::TabungNotFound => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ReferenceError",
                "kutipan.tabung_not_found",
            ),
            KutipanError::OutsideTabungPeriod => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ReferenceError",
                "kutipan.outside_tabung_period",
            ),
            KutipanError::Repository(err) => repository_failure(err),
        };

        (status, error_body(name, message))
    }
}
