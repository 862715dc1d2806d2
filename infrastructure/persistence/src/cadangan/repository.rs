use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::cadangan::model::Cadangan;
use business::domain::cadangan::repository::{CadanganFilter, CadanganRepository};
use business::domain::crud::CrudRepository;
use business::domain::errors::RepositoryError;
use business::domain::tenant::model::TenantContext;

use super::entity::CadanganEntity;
use crate::errors::{ensure_affected, map_sqlx_error};
use crate::partition::TenantPools;

const COLUMNS: &str = "id, tenant_id, cadangan_type, content, sender_name, sender_phone, is_open, remark, score, created_at, updated_at";

pub struct CadanganRepositoryPostgres {
    pools: Arc<TenantPools>,
}

impl CadanganRepositoryPostgres {
    pub fn new(pools: Arc<TenantPools>) -> Self {
        Self { pools }
    }
}

#[async_trait]
impl CrudRepository<Cadangan> for CadanganRepositoryPostgres {
    async fn list(&self, tenant: &TenantContext) -> Result<Vec<Cadangan>, RepositoryError> {
        self.find(tenant, CadanganFilter::default()).await
    }

    async fn get_by_id(
        &self,
        tenant: &TenantContext,
        id: Uuid,
    ) -> Result<Cadangan, RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        let entity = sqlx::query_as::<_, CadanganEntity>(&format!(
            "SELECT {COLUMNS} FROM cadangan WHERE tenant_id = $1 AND id = $2"
        ))
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
        record: &Cadangan,
    ) -> Result<(), RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        sqlx::query(&format!(
            "INSERT INTO cadangan ({COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)"
        ))
        .bind(record.id)
        .bind(tenant.tenant_id.as_str())
        .bind(record.cadangan_type.to_string())
        .bind(&record.content)
        .bind(&record.sender_name)
        .bind(&record.sender_phone)
        .bind(record.is_open)
        .bind(&record.remark)
        .bind(record.score)
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
        record: &Cadangan,
    ) -> Result<(), RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        let result = sqlx::query(
            r#"UPDATE cadangan SET
                is_open = $3,
                remark = $4,
                score = $5,
                updated_at = $6
            WHERE tenant_id = $1 AND id = $2"#,
        )
        .bind(tenant.tenant_id.as_str())
        .bind(record.id)
        .bind(record.is_open)
        .bind(&record.remark)
        .bind(record.score)
        .bind(record.updated_at)
        .execute(&pool)
        .await
        .map_err(map_sqlx_error)?;

        ensure_affected(result.rows_affected())
    }

    async fn delete(&self, tenant: &TenantContext, id: Uuid) -> Result<(), RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        let result = sqlx::query("DELETE FROM cadangan WHERE tenant_id = $1 AND id = $2")
            .bind(tenant.tenant_id.as_str())
            .bind(id)
            .execute(&pool)
            .await
            .map_err(map_sqlx_error)?;

        ensure_affected(result.rows_affected())
    }
}

#[async_trait]
impl CadanganRepository for CadanganRepositoryPostgres {
    async fn find(
        &self,
        tenant: &TenantContext,
        filter: CadanganFilter,
    ) -> Result<Vec<Cadangan>, RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        let entities = sqlx::query_as::<_, CadanganEntity>(&format!(
            r#"SELECT {COLUMNS} FROM cadangan
            WHERE tenant_id = $1
              AND ($2::text IS NULL OR cadangan_type = $2)
              AND ($3::boolean IS NULL OR is_open = $3)
            ORDER BY created_at DESC"#
        ))
        .bind(tenant.tenant_id.as_str())
        .bind(filter.cadangan_type.map(|t| t.to_string()))
        .bind(filter.is_open)
        .fetch_all(&pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
