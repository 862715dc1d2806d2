use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::crud::CrudRepository;
use business::domain::errors::RepositoryError;
use business::domain::kutipan::model::Kutipan;
use business::domain::kutipan::repository::{CollectionRange, KutipanRepository};
use business::domain::tenant::model::TenantContext;

use super::entity::KutipanEntity;
use crate::errors::{ensure_affected, map_sqlx_error};
use crate::partition::TenantPools;

const COLUMNS: &str =
    "id, tenant_id, tabung_id, amount_sen, collected_at, note, created_at, updated_at";

pub struct KutipanRepositoryPostgres {
    pools: Arc<TenantPools>,
}

impl KutipanRepositoryPostgres {
    pub fn new(pools: Arc<TenantPools>) -> Self {
        Self { pools }
    }
}

#[async_trait]
impl CrudRepository<Kutipan> for KutipanRepositoryPostgres {
    async fn list(&self, tenant: &TenantContext) -> Result<Vec<Kutipan>, RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        let entities = sqlx::query_as::<_, KutipanEntity>(&format!(
            "SELECT {COLUMNS} FROM kutipan WHERE tenant_id = $1 ORDER BY collected_at DESC"
        ))
        .bind(tenant.tenant_id.as_str())
        .fetch_all(&pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, tenant: &TenantContext, id: Uuid) -> Result<Kutipan, RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        let entity = sqlx::query_as::<_, KutipanEntity>(&format!(
            "SELECT {COLUMNS} FROM kutipan WHERE tenant_id = $1 AND id = $2"
        ))
        .bind(tenant.tenant_id.as_str())
        .bind(id)
        .fetch_optional(&pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, tenant: &TenantContext, record: &Kutipan) -> Result<(), RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        sqlx::query(&format!(
            "INSERT INTO kutipan ({COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"
        ))
        .bind(record.id)
        .bind(tenant.tenant_id.as_str())
        .bind(record.tabung_id)
        .bind(record.amount_sen)
        .bind(record.collected_at)
        .bind(&record.note)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn update(&self, tenant: &TenantContext, record: &Kutipan) -> Result<(), RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        let result = sqlx::query(
            r#"UPDATE kutipan SET
                amount_sen = $3,
                collected_at = $4,
                note = $5,
                updated_at = $6
            WHERE tenant_id = $1 AND id = $2"#,
        )
        .bind(tenant.tenant_id.as_str())
        .bind(record.id)
        .bind(record.amount_sen)
        .bind(record.collected_at)
        .bind(&record.note)
        .bind(record.updated_at)
        .execute(&pool)
        .await
        .map_err(map_sqlx_error)?;

        ensure_affected(result.rows_affected())
    }

    async fn delete(&self, tenant: &TenantContext, id: Uuid) -> Result<(), RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        let result = sqlx::query("DELETE FROM kutipan WHERE tenant_id = $1 AND id = $2")
            .bind(tenant.tenant_id.as_str())
            .bind(id)
            .execute(&pool)
            .await
            .map_err(map_sqlx_error)?;

        ensure_affected(result.rows_affected())
    }
}

#[async_trait]
impl KutipanRepository for KutipanRepositoryPostgres {
    async fn list_by_tabung(
        &self,
        tenant: &TenantContext,
        tabung_id: Uuid,
        range: CollectionRange,
    ) -> Result<Vec<Kutipan>, RepositoryError> {
        let pool = self.pools.pool_for(tenant).await?;
        // NULL bounds leave that side of the range open.
        let entities = sqlx::query_as::<_, KutipanEntity>(&format!(
            r#"SELECT {COLUMNS} FROM kutipan
            WHERE tenant_id = $1
              AND tabung_id = $2
              AND ($3::timestamptz IS NULL OR collected_at >= $3)
              AND ($4::timestamptz IS NULL OR collected_at <= $4)
            ORDER BY collected_at ASC"#
        ))
        .bind(tenant.tenant_id.as_str())
        .bind(tabung_id)
        .bind(range.from)
        .bind(range.to)
        .fetch_all(&pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
