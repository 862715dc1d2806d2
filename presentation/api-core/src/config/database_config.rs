use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

/// Connect to the shared database and bring its schema up to date
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(config).await?;
    run_migrations(&pool).await?;
    tracing::info!("Shared database ready at {}", config.descriptor.redacted());
    Ok(pool)
}
