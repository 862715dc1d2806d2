use std::sync::Arc;

use async_trait::async_trait;
use poem::http::{HeaderMap, HeaderValue, StatusCode, header};
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};
use thiserror::Error;

use crate::error::{ErrorResponse, IntoRejection, rejection_response};

/// Caller identity established by the auth gate.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    pub subject: String,
    pub issuer: Option<String>,
}

#[derive(Error, Debug)]
pub enum AuthRejection {
    #[error("auth.missing_token")]
    MissingToken,
    #[error("auth.invalid_token_header")]
    InvalidHeader,
    #[error("auth.missing_kid")]
    MissingKid,
    #[error("auth.unknown_kid")]
    UnknownKid,
    #[error("auth.token_validation_failed")]
    InvalidToken,
    #[error("auth.keys_unavailable")]
    KeysUnavailable,
}

impl IntoRejection for AuthRejection {
    fn into_rejection(self) -> (StatusCode, ErrorResponse) {
        let (status, name) = match &self {
            // The identity provider is down; the caller's token may be fine.
            AuthRejection::KeysUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "ServiceUnavailable")
            }
            _ => (StatusCode::UNAUTHORIZED, "Unauthorized"),
        };

        (status, ErrorResponse::new(name, &self.to_string()))
    }
}

/// Decides whether a request carries a trusted credential.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    async fn validate(&self, headers: &HeaderMap) -> Result<Principal, AuthRejection>;
}

/// Token of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Rejects requests the validator does not accept and stores the
/// [`Principal`] of accepted ones in the request extensions.
pub struct AuthGate {
    validator: Arc<dyn TokenValidator>,
}

impl AuthGate {
    pub fn new(validator: Arc<dyn TokenValidator>) -> Self {
        Self { validator }
    }
}

impl<E: Endpoint> Middleware<E> for AuthGate {
    type Output = AuthGateEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        AuthGateEndpoint {
            inner: ep,
            validator: self.validator.clone(),
        }
    }
}

pub struct AuthGateEndpoint<E> {
    inner: E,
    validator: Arc<dyn TokenValidator>,
}

impl<E: Endpoint> Endpoint for AuthGateEndpoint<E> {
    type Output = Response;

    async fn call(&self, mut req: Request) -> Result<Self::Output> {
        let verdict = self.validator.validate(req.headers()).await;
        match verdict {
            Ok(principal) => {
                req.extensions_mut().insert(principal);
                self.inner.call(req).await.map(IntoResponse::into_response)
            }
            Err(rejection) => {
                tracing::warn!(
                    "Rejected {} {}: {}",
                    req.method(),
                    req.uri().path(),
                    rejection
                );
                let mut response = rejection_response(rejection);
                if response.status() == StatusCode::UNAUTHORIZED {
                    response
                        .headers_mut()
                        .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
                }
                Ok(response)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(authorization: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, authorization.parse().unwrap());
        headers
    }

    #[test]
    fn should_extract_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(bearer_token(&headers("bearer abc")), Some("abc"));
    }

    #[test]
    fn should_ignore_other_schemes_and_empty_tokens() {
        assert!(bearer_token(&headers("Basic dXNlcjpwdw==")).is_none());
        assert!(bearer_token(&headers("Bearer ")).is_none());
        assert!(bearer_token(&HeaderMap::new()).is_none());
    }

    #[test]
    fn should_reject_with_unauthorized() {
        let (status, body) = AuthRejection::MissingToken.into_rejection();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.message, "auth.missing_token");
    }

    #[test]
    fn should_report_unavailable_keys_as_server_side_failure() {
        let (status, body) = AuthRejection::KeysUnavailable.into_rejection();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.name, "ServiceUnavailable");
        assert_eq!(body.message, "auth.keys_unavailable");
    }
}
