//! Bootstrap shared by the tabung and cadangan services: environment
//! resolution, tenant and auth middleware, the stage-dependent chain builder
//! and the server lifecycle.

pub mod config {
    pub mod auth_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod environment;
    pub mod server_config;
    pub mod stage;
    pub mod tenant_config;
}
pub mod docs;
pub mod error;
pub mod health;
pub mod manifest;
pub mod middleware {
    pub mod auth;
    pub mod chain;
    pub mod tenant;
}
pub mod security;
pub mod setup {
    pub mod bootstrap;
    pub mod server;
    pub mod telemetry;
}

pub use config::environment::{ConfigError, EnvironmentConfig};
pub use config::stage::{DeploymentStage, StagePosture};
pub use manifest::ServiceManifest;
pub use middleware::chain::{ChainPlan, ChainSettings, Layer, build_app};
