use poem::http::StatusCode;
use poem::web::Json;
use poem::{IntoResponse, Response};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::tenant::errors::TenantError;

#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}

/// Rejections raised by middleware before any controller runs.
pub trait IntoRejection {
    fn into_rejection(self) -> (StatusCode, ErrorResponse);
}

/// Renders a rejection as a JSON response.
pub fn rejection_response<E: IntoRejection>(err: E) -> Response {
    let (status, body) = err.into_rejection();
    Json(body).with_status(status).into_response()
}

impl IntoRejection for TenantError {
    fn into_rejection(self) -> (StatusCode, ErrorResponse) {
        let (status, name) = match &self {
            TenantError::Missing => (StatusCode::BAD_REQUEST, "ValidationError"),
            TenantError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            TenantError::Inactive => (StatusCode::FORBIDDEN, "Forbidden"),
            TenantError::Lookup(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, ErrorResponse::new(name, &self.to_string()))
    }
}
