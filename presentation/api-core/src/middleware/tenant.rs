use std::collections::HashMap;
use std::sync::Arc;

use business::application::tenant::registry::TenantRegistry;
use poem::http::header;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

use crate::error::rejection_response;

/// Header and query parameter naming the tenant of a request.
pub const TENANT_KEY: &str = "__tenant";

/// Where a request names its tenant, in order of precedence: the `__tenant`
/// header, the `__tenant` query parameter, then the left-most label of the
/// host under `base_domain`.
#[derive(Debug, Clone, Default)]
pub struct TenantSource {
    pub base_domain: Option<String>,
}

impl TenantSource {
    pub fn extract(&self, req: &Request) -> Option<String> {
        if let Some(value) = req.header(TENANT_KEY).filter(|v| !v.trim().is_empty()) {
            return Some(value.to_string());
        }

        if let Some(value) = req
            .params::<HashMap<String, String>>()
            .ok()
            .and_then(|mut params| params.remove(TENANT_KEY))
            .filter(|v| !v.trim().is_empty())
        {
            return Some(value);
        }

        let base_domain = self.base_domain.as_deref()?;
        let host = req.header(header::HOST)?;
        subdomain_of(host, base_domain)
    }
}

fn subdomain_of(host: &str, base_domain: &str) -> Option<String> {
    let host = host.split(':').next()?.to_ascii_lowercase();
    let prefix = host.strip_suffix(base_domain)?.strip_suffix('.')?;
    prefix
        .rsplit('.')
        .next_back()
        .filter(|label| !label.is_empty())
        .map(str::to_string)
}

/// Resolves the tenant of each request and stores its
/// [`TenantContext`](business::domain::tenant::model::TenantContext) in the
/// request extensions. Unresolvable requests never reach the inner endpoint.
pub struct TenantResolution {
    registry: Arc<TenantRegistry>,
    source: TenantSource,
}

impl TenantResolution {
    pub fn new(registry: Arc<TenantRegistry>, source: TenantSource) -> Self {
        Self { registry, source }
    }
}

impl<E: Endpoint> Middleware<E> for TenantResolution {
    type Output = TenantResolutionEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        TenantResolutionEndpoint {
            inner: ep,
            registry: self.registry.clone(),
            source: self.source.clone(),
        }
    }
}

pub struct TenantResolutionEndpoint<E> {
    inner: E,
    registry: Arc<TenantRegistry>,
    source: TenantSource,
}

impl<E: Endpoint> Endpoint for TenantResolutionEndpoint<E> {
    type Output = Response;

    async fn call(&self, mut req: Request) -> Result<Self::Output> {
        let identifier = self.source.extract(&req);

        match self.registry.resolve(identifier.as_deref()).await {
            Ok(context) => {
                req.extensions_mut().insert(context);
                self.inner.call(req).await.map(IntoResponse::into_response)
            }
            Err(err) => {
                tracing::debug!(
                    "Rejected {} {}: {}",
                    req.method(),
                    req.uri().path(),
                    err
                );
                Ok(rejection_response(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base_domain: Option<&str>) -> TenantSource {
        TenantSource {
            base_domain: base_domain.map(str::to_string),
        }
    }

    #[test]
    fn should_prefer_header_over_query_and_host() {
        let req = Request::builder()
            .uri_str("/tabung?__tenant=from-query")
            .header(TENANT_KEY, "from-header")
            .header(header::HOST, "from-host.masjid.example")
            .finish();

        assert_eq!(
            source(Some("masjid.example")).extract(&req).as_deref(),
            Some("from-header")
        );
    }

    #[test]
    fn should_fall_back_to_query_parameter() {
        let req = Request::builder()
            .uri_str("/tabung?__tenant=al-falah&x=1")
            .finish();

        assert_eq!(source(None).extract(&req).as_deref(), Some("al-falah"));
    }

    #[test]
    fn should_use_subdomain_under_base_domain() {
        let req = Request::builder()
            .uri_str("/tabung")
            .header(header::HOST, "Jamek.Masjid.Example:8080")
            .finish();

        assert_eq!(
            source(Some("masjid.example")).extract(&req).as_deref(),
            Some("jamek")
        );
    }

    #[test]
    fn should_ignore_host_without_base_domain() {
        let req = Request::builder()
            .uri_str("/tabung")
            .header(header::HOST, "jamek.masjid.example")
            .finish();

        assert!(source(None).extract(&req).is_none());
    }

    #[test]
    fn should_take_left_most_label_of_nested_subdomain() {
        assert_eq!(
            subdomain_of("api.jamek.masjid.example", "masjid.example").as_deref(),
            Some("api")
        );
        assert!(subdomain_of("masjid.example", "masjid.example").is_none());
        assert!(subdomain_of("jamek.other.example", "masjid.example").is_none());
    }
}
