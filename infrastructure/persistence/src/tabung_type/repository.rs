use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::crud::CrudRepository;
use business::domain::errors::RepositoryError;
use business::domain::tabung_type::model::TabungType;
use business::domain::tenant::model::TenantContext;

use super::entity::TabungTypeEntity;
use crate::errors::{ensure_affected, map_sqlx_error};
use crate::partition::TenantPools;

pub struct TabungTypeRepositoryPostgres {
    pools: Arc<TenantPools>,
}

impl TabungTypeRepositoryPostgres {
    pub fn new(pools: Arc<TenantPools>) -> Self {
        Self { pools }
    }
}

#[async_trait]
impl CrudRepository<TabungType> for TabungTypeRepositoryPostgres {
    async fn list(&self, tenant: &TenantContext) -> Result<Vec<TabungType>, RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        let entities = sqlx::query_as::<_, TabungTypeEntity>(
            "SELECT id, tenant_id, name, created_at, updated_at FROM tabung_types WHERE tenant_id = $1 ORDER BY name",
        )
        .bind(tenant.tenant_id.as_str())
        .fetch_all(&pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(
        &self,
        tenant: &TenantContext,
        id: Uuid,
    ) -> Result<TabungType, RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        let entity = sqlx::query_as::<_, TabungTypeEntity>(
            "SELECT id, tenant_id, name, created_at, updated_at FROM tabung_types WHERE tenant_id = $1 AND id = $2",
        )
        .bind(tenant.tenant_id.as_str())
        .bind(id)
        .fetch_optional(&pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(
        &self,
        tenant: &TenantContext,
        record: &TabungType,
    ) -> Result<(), RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        sqlx::query(
            "INSERT INTO tabung_types (id, tenant_id, name, created_at, updated_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(record.id)
        .bind(tenant.tenant_id.as_str())
        .bind(&record.name)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn update(
        &self,
        tenant: &TenantContext,
        record: &TabungType,
    ) -> Result<(), RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        let result = sqlx::query(
            "UPDATE tabung_types SET name = $3, updated_at = $4 WHERE tenant_id = $1 AND id = $2",
        )
        .bind(tenant.tenant_id.as_str())
        .bind(record.id)
        .bind(&record.name)
        .bind(record.updated_at)
        .execute(&pool)
        .await
        .map_err(map_sqlx_error)?;

        ensure_affected(result.rows_affected())
    }

    async fn delete(&self, tenant: &TenantContext, id: Uuid) -> Result<(), RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        let result = sqlx::query("DELETE FROM tabung_types WHERE tenant_id = $1 AND id = $2")
            .bind(tenant.tenant_id.as_str())
            .bind(id)
            .execute(&pool)
            .await
            .map_err(map_sqlx_error)?;

        ensure_affected(result.rows_affected())
    }
}
