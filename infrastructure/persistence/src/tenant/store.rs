use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::tenant::model::Tenant;
use business::domain::tenant::repository::TenantStore;

use super::entity::TenantEntity;
use crate::errors::map_sqlx_error;

/// Reads the `tenants` table of the shared database. Names and ids match
/// case-insensitively.
pub struct TenantStorePostgres {
    pool: PgPool,
}

impl TenantStorePostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TenantStore for TenantStorePostgres {
    async fn find(&self, key: &str) -> Result<Option<Tenant>, RepositoryError> {
        let entity = sqlx::query_as::<_, TenantEntity>(
            "SELECT id, name, display_name, connection_string, is_active FROM tenants WHERE lower(name) = lower($1) OR lower(id) = lower($1)",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }
}
