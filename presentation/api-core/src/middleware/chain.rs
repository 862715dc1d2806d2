//! Assembles a service's HTTP application from its controllers.
//!
//! Domain requests traverse, outermost first: CORS, tenant resolution, the
//! auth gate (guarded stages only), then the controllers. `/health` and, in
//! documented stages, `/docs` sit beside the domain tree behind CORS alone.

use std::sync::Arc;

use business::application::tenant::registry::TenantRegistry;
use poem::middleware::Tracing;
use poem::{EndpointExt, IntoEndpoint, Route, endpoint::BoxEndpoint};
use poem_openapi::{OpenApi, OpenApiService};
use thiserror::Error;

use crate::config::cors_config::init_cors;
use crate::config::environment::EnvironmentConfig;
use crate::config::stage::StagePosture;
use crate::docs::docs_route;
use crate::health::health_endpoint;
use crate::manifest::ServiceManifest;
use crate::middleware::auth::{AuthGate, TokenValidator};
use crate::middleware::tenant::{TenantResolution, TenantSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Cors,
    TenantResolution,
    AuthGate,
    Controllers,
}

/// Ordered interceptors for domain requests, fixed when the app is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainPlan {
    pub layers: Vec<Layer>,
    pub documentation: bool,
}

impl ChainPlan {
    pub fn for_posture(posture: StagePosture) -> Self {
        match posture {
            StagePosture::Documented => Self {
                layers: vec![Layer::Cors, Layer::TenantResolution, Layer::Controllers],
                documentation: true,
            },
            StagePosture::Guarded => Self {
                layers: vec![
                    Layer::Cors,
                    Layer::TenantResolution,
                    Layer::AuthGate,
                    Layer::Controllers,
                ],
                documentation: false,
            },
        }
    }

    pub fn has(&self, layer: Layer) -> bool {
        self.layers.contains(&layer)
    }

    fn position(&self, layer: Layer) -> Option<usize> {
        self.layers.iter().position(|l| *l == layer)
    }

    /// True when `earlier` runs before `later` for every domain request.
    pub fn precedes(&self, earlier: Layer, later: Layer) -> bool {
        matches!(
            (self.position(earlier), self.position(later)),
            (Some(a), Some(b)) if a < b
        )
    }
}

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("chain.missing_token_validator")]
    MissingTokenValidator,
}

/// Inputs of [`build_app`].
pub struct ChainSettings {
    pub manifest: ServiceManifest,
    pub posture: StagePosture,
    pub allowed_origins: Vec<String>,
    pub tenant_source: TenantSource,
    pub registry: Arc<TenantRegistry>,
    /// Required when `posture` is [`StagePosture::Guarded`].
    pub validator: Option<Arc<dyn TokenValidator>>,
}

impl ChainSettings {
    pub fn from_environment(
        config: &EnvironmentConfig,
        manifest: ServiceManifest,
        registry: Arc<TenantRegistry>,
        validator: Option<Arc<dyn TokenValidator>>,
    ) -> Self {
        Self {
            manifest,
            posture: config.stage.posture(),
            allowed_origins: config.allowed_origins.clone(),
            tenant_source: TenantSource {
                base_domain: config.tenant.base_domain.clone(),
            },
            registry,
            validator,
        }
    }
}

pub fn build_app<T>(api: T, settings: ChainSettings) -> Result<BoxEndpoint<'static>, ChainError>
where
    T: OpenApi + Send + Sync + 'static,
{
    let plan = ChainPlan::for_posture(settings.posture);
    let service = OpenApiService::new(api, settings.manifest.title, settings.manifest.version);

    let mut app = Route::new().at("/health", health_endpoint(&settings.manifest));
    if plan.documentation {
        app = app.nest("/docs", docs_route(&service));
    }

    let tenant = TenantResolution::new(settings.registry, settings.tenant_source);
    let domain = if plan.has(Layer::AuthGate) {
        let validator = settings
            .validator
            .ok_or(ChainError::MissingTokenValidator)?;
        service.with(AuthGate::new(validator)).with(tenant).boxed()
    } else {
        service.into_endpoint().with(tenant).boxed()
    };

    tracing::info!(
        "{} {}: {:?}, documentation {}",
        settings.manifest.title,
        settings.manifest.version,
        plan.layers,
        if plan.documentation { "on" } else { "off" }
    );

    let cors = init_cors(&settings.allowed_origins, settings.manifest.allowed_methods);
    Ok(app.nest("/", domain).with(cors).with(Tracing).boxed())
}
