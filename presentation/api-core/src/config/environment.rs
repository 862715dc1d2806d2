use std::time::Duration;

use persistence::db::{ConnectionDescriptor, DatabaseConfig, SslMode};
use secrecy::SecretString;
use thiserror::Error;

use super::auth_config::AuthConfig;
use super::cors_config::parse_origins;
use super::server_config::ServerConfig;
use super::stage::{DeploymentStage, StagePosture};
use super::tenant_config::TenantConfig;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("config.missing: {0}")]
    Missing(&'static str),
    #[error("config.invalid: {name} ({reason})")]
    Invalid { name: &'static str, reason: String },
}

/// Everything a service needs to boot, read once at startup.
///
/// Required: `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_PORT`,
/// `SERVER_PORT`, plus `AUTH_JWKS_URL` whenever the stage installs the auth
/// gate. Optional: `ALLOW_ORIGINS`, `APP_ENV`, `SERVICE_IP`, `DB_SSL_MODE`,
/// `DB_MAX_CONNECTIONS`, `TENANT_BASE_DOMAIN`, `TENANT_CACHE_TTL_SECS`,
/// `AUTH_ISSUER`, `AUTH_AUDIENCE`.
#[derive(Debug)]
pub struct EnvironmentConfig {
    pub database: DatabaseConfig,
    pub allowed_origins: Vec<String>,
    pub server: ServerConfig,
    pub stage: DeploymentStage,
    pub tenant: TenantConfig,
    pub auth: AuthConfig,
}

impl EnvironmentConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from `lookup`, failing on the first missing
    /// or malformed variable.
    pub fn resolve<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required = |name: &'static str| optional(name).ok_or(ConfigError::Missing(name));

        let host = required("DB_HOST")?;
        let user = required("DB_USER")?;
        // The password is kept verbatim; surrounding spaces may be part of it.
        let password = lookup("DB_PASSWORD")
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::Missing("DB_PASSWORD"))?;
        let database = required("DB_NAME")?;
        let db_port = parse_port("DB_PORT", &required("DB_PORT")?)?;
        let server_port = parse_port("SERVER_PORT", &required("SERVER_PORT")?)?;

        let ssl_mode = match optional("DB_SSL_MODE") {
            Some(raw) => raw.parse::<SslMode>().map_err(|_| ConfigError::Invalid {
                name: "DB_SSL_MODE",
                reason: format!("unknown sslmode '{}'", raw),
            })?,
            None => SslMode::default(),
        };

        let mut database_config = DatabaseConfig::new(ConnectionDescriptor {
            host,
            port: db_port,
            user,
            password: SecretString::from(password),
            database,
            ssl_mode,
        });
        if let Some(raw) = optional("DB_MAX_CONNECTIONS") {
            database_config.max_connections = parse_positive("DB_MAX_CONNECTIONS", &raw)?;
        }

        let mut tenant = TenantConfig {
            base_domain: optional("TENANT_BASE_DOMAIN")
                .map(|domain| domain.trim_matches('.').to_ascii_lowercase()),
            ..TenantConfig::default()
        };
        if let Some(raw) = optional("TENANT_CACHE_TTL_SECS") {
            let secs = raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "TENANT_CACHE_TTL_SECS",
                reason: "expected a number of seconds".to_string(),
            })?;
            tenant.cache_ttl = Duration::from_secs(secs);
        }

        let stage = DeploymentStage::parse(lookup("APP_ENV").as_deref());
        let auth = AuthConfig {
            jwks_url: optional("AUTH_JWKS_URL"),
            issuer: optional("AUTH_ISSUER"),
            audience: optional("AUTH_AUDIENCE"),
        };
        if stage.posture() == StagePosture::Guarded && auth.jwks_url.is_none() {
            return Err(ConfigError::Missing("AUTH_JWKS_URL"));
        }

        Ok(Self {
            database: database_config,
            allowed_origins: optional("ALLOW_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
            server: ServerConfig {
                ip: optional("SERVICE_IP").unwrap_or_else(|| ServerConfig::DEFAULT_IP.to_string()),
                port: server_port,
            },
            stage,
            tenant,
            auth,
        })
    }
}

fn parse_port(name: &'static str, raw: &str) -> Result<u16, ConfigError> {
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::Invalid {
            name,
            reason: format!("'{}' is not a TCP port", raw),
        }),
    }
}

fn parse_positive(name: &'static str, raw: &str) -> Result<u32, ConfigError> {
    match raw.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::Invalid {
            name,
            reason: format!("'{}' is not a positive number", raw),
        }),
    }
}
