use std::sync::Arc;

use business::application::tenant::registry::TenantRegistry;
use dotenvy::dotenv;
use logger::TracingLogger;
use persistence::partition::TenantPools;
use persistence::tenant::store::TenantStorePostgres;
use poem_openapi::OpenApi;

use crate::config::database_config::init_database;
use crate::config::environment::EnvironmentConfig;
use crate::manifest::ServiceManifest;
use crate::middleware::auth::TokenValidator;
use crate::middleware::chain::{ChainSettings, build_app};
use crate::security::JwksTokenValidator;
use crate::setup::server::Server;
use crate::setup::telemetry;

/// Process-wide state shared by every request of a service.
pub struct Platform {
    pub config: EnvironmentConfig,
    pub pools: Arc<TenantPools>,
    pub registry: Arc<TenantRegistry>,
    pub validator: Option<Arc<dyn TokenValidator>>,
}

impl Platform {
    /// Loads `.env`, resolves the environment and connects to the shared
    /// database. Any failure here aborts startup.
    pub async fn init() -> anyhow::Result<Self> {
        dotenv().ok();
        telemetry::init();

        let config = EnvironmentConfig::from_env().inspect_err(|e| {
            tracing::error!("Invalid environment: {}", e);
        })?;
        tracing::info!("Starting in {} stage", config.stage);

        let shared = init_database(&config.database).await?;
        let pools = Arc::new(TenantPools::new(
            shared.clone(),
            config.database.pool_options(),
        ));
        let registry = Arc::new(TenantRegistry::new(
            Arc::new(TenantStorePostgres::new(shared)),
            config.tenant.cache_ttl,
            Arc::new(TracingLogger),
        ));
        let validator = JwksTokenValidator::from_config(&config.auth)
            .map(|validator| Arc::new(validator) as Arc<dyn TokenValidator>);

        Ok(Self {
            config,
            pools,
            registry,
            validator,
        })
    }

    /// Builds the middleware chain around `api` and serves it until shutdown.
    pub async fn serve<T>(self, manifest: ServiceManifest, api: T) -> anyhow::Result<()>
    where
        T: OpenApi + Send + Sync + 'static,
    {
        let settings =
            ChainSettings::from_environment(&self.config, manifest, self.registry, self.validator);
        let app = build_app(api, settings)?;
        Server::run(app, &self.config.server).await
    }
}
