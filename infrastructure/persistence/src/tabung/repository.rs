use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::crud::CrudRepository;
use business::domain::errors::RepositoryError;
use business::domain::tabung::model::Tabung;
use business::domain::tabung::repository::TabungRepository;
use business::domain::tenant::model::TenantContext;

use super::entity::TabungEntity;
use crate::errors::{ensure_affected, map_sqlx_error};
use crate::partition::TenantPools;

const COLUMNS: &str = "id, tenant_id, tabung_type_id, name, start_date, end_date, is_cents_enabled, created_at, updated_at";

pub struct TabungRepositoryPostgres {
    pools: Arc<TenantPools>,
}

impl TabungRepositoryPostgres {
    pub fn new(pools: Arc<TenantPools>) -> Self {
        Self { pools }
    }
}

#[async_trait]
impl CrudRepository<Tabung> for TabungRepositoryPostgres {
    async fn list(&self, tenant: &TenantContext) -> Result<Vec<Tabung>, RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        let entities = sqlx::query_as::<_, TabungEntity>(&format!(
            "SELECT {COLUMNS} FROM tabung WHERE tenant_id = $1 ORDER BY created_at DESC"
        ))
        .bind(tenant.tenant_id.as_str())
        .fetch_all(&pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, tenant: &TenantContext, id: Uuid) -> Result<Tabung, RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        let entity = sqlx::query_as::<_, TabungEntity>(&format!(
            "SELECT {COLUMNS} FROM tabung WHERE tenant_id = $1 AND id = $2"
        ))
        .bind(tenant.tenant_id.as_str())
        .bind(id)
        .fetch_optional(&pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, tenant: &TenantContext, record: &Tabung) -> Result<(), RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        sqlx::query(&format!(
            "INSERT INTO tabung ({COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"
        ))
        .bind(record.id)
        .bind(tenant.tenant_id.as_str())
        .bind(record.tabung_type_id)
        .bind(&record.name)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(record.is_cents_enabled)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn update(&self, tenant: &TenantContext, record: &Tabung) -> Result<(), RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        let result = sqlx::query(
            r#"UPDATE tabung SET
                tabung_type_id = $3,
                name = $4,
                start_date = $5,
                end_date = $6,
                is_cents_enabled = $7,
                updated_at = $8
            WHERE tenant_id = $1 AND id = $2"#,
        )
        .bind(tenant.tenant_id.as_str())
        .bind(record.id)
        .bind(record.tabung_type_id)
        .bind(&record.name)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(record.is_cents_enabled)
        .bind(record.updated_at)
        .execute(&pool)
        .await
        .map_err(map_sqlx_error)?;

        ensure_affected(result.rows_affected())
    }

    async fn delete(&self, tenant: &TenantContext, id: Uuid) -> Result<(), RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        let result = sqlx::query("DELETE FROM tabung WHERE tenant_id = $1 AND id = $2")
            .bind(tenant.tenant_id.as_str())
            .bind(id)
            .execute(&pool)
            .await
            .map_err(map_sqlx_error)?;

        ensure_affected(result.rows_affected())
    }
}

#[async_trait]
impl TabungRepository for TabungRepositoryPostgres {
    async fn count_by_type(
        &self,
        tenant: &TenantContext,
        tabung_type_id: Uuid,
    ) -> Result<u64, RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tabung WHERE tenant_id = $1 AND tabung_type_id = $2",
        )
        .bind(tenant.tenant_id.as_str())
        .bind(tabung_type_id)
        .fetch_one(&pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(count.max(0) as u64)
    }
}
