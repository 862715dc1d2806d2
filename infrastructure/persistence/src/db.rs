use secrecy::{ExposeSecret, SecretString};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{PgPool, migrate::Migrator};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Migrations of the shared database, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
    #[error("database.invalid_ssl_mode")]
    InvalidSslMode,
}

/// TLS posture of a Postgres connection, spelled as libpq's `sslmode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SslMode {
    #[default]
    Disable,
    Allow,
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl FromStr for SslMode {
    type Err = DatabaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disable" => Ok(SslMode::Disable),
            "allow" => Ok(SslMode::Allow),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            "verify-ca" => Ok(SslMode::VerifyCa),
            "verify-full" => Ok(SslMode::VerifyFull),
            _ => Err(DatabaseError::InvalidSslMode),
        }
    }
}

impl std::fmt::Display for SslMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = match self {
            SslMode::Disable => "disable",
            SslMode::Allow => "allow",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        };
        write!(f, "{}", mode)
    }
}

impl From<SslMode> for PgSslMode {
    fn from(mode: SslMode) -> Self {
        match mode {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Allow => PgSslMode::Allow,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
            SslMode::VerifyCa => PgSslMode::VerifyCa,
            SslMode::VerifyFull => PgSslMode::VerifyFull,
        }
    }
}

/// Every session runs in UTC so `TIMESTAMPTZ` values round-trip unchanged.
pub const SESSION_TIME_ZONE: &str = "UTC";

/// Where the shared database lives and how to reach it.
#[derive(Debug)]
pub struct ConnectionDescriptor {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: SecretString,
    pub database: String,
    pub ssl_mode: SslMode,
}

impl ConnectionDescriptor {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(self.password.expose_secret())
            .database(&self.database)
            .ssl_mode(self.ssl_mode.into())
            .options([("TimeZone", SESSION_TIME_ZONE)])
    }

    /// Connection string with the password masked, for logs.
    pub fn redacted(&self) -> String {
        format!(
            "postgres://{}:***@{}:{}/{}?sslmode={}&TimeZone={}",
            self.user, self.host, self.port, self.database, self.ssl_mode, SESSION_TIME_ZONE
        )
    }
}

/// Parses a tenant's dedicated connection string, pinning the session time zone.
pub fn dedicated_connect_options(connection_string: &str) -> Result<PgConnectOptions, DatabaseError> {
    let options = PgConnectOptions::from_str(connection_string)
        .map_err(|_| DatabaseError::ConnectionError)?;
    Ok(options.options([("TimeZone", SESSION_TIME_ZONE)]))
}

/// Configuration for the database connection
#[derive(Debug)]
pub struct DatabaseConfig {
    pub descriptor: ConnectionDescriptor,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(descriptor: ConnectionDescriptor) -> Self {
        Self {
            descriptor,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    tracing::info!("Connecting to {}", config.descriptor.redacted());

    let pool = config
        .pool_options()
        .connect_with(config.descriptor.connect_options())
        .await
        .map_err(|e| {
            tracing::error!("Database connection failed: {}", e);
            DatabaseError::ConnectionError
        })?;

    Ok(pool)
}

/// Applies the embedded migrations to a tenant database, shared or dedicated
pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    MIGRATOR.run(pool).await.map_err(|e| {
        tracing::error!("Migration failed: {}", e);
        DatabaseError::MigrationError
    })
}
