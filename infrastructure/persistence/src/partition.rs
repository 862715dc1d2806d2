use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use business::domain::errors::RepositoryError;
use business::domain::tenant::model::{TenantContext, TenantPartition};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::OnceCell;

use crate::db::{dedicated_connect_options, run_migrations};

type DedicatedSlot = Arc<OnceCell<PgPool>>;

/// Hands out the pool that holds a tenant's rows.
///
/// Shared tenants use the pool of the shared database. Dedicated tenants get
/// a lazily connected pool per connection string, migrated on first use and
/// kept for the life of the process. A failed migration is not cached; the
/// next request for that tenant tries again.
pub struct TenantPools {
    shared: PgPool,
    dedicated: RwLock<HashMap<String, DedicatedSlot>>,
    options: PgPoolOptions,
}

impl TenantPools {
    pub fn new(shared: PgPool, options: PgPoolOptions) -> Self {
        Self {
            shared,
            dedicated: RwLock::new(HashMap::new()),
            options,
        }
    }

    pub fn shared(&self) -> &PgPool {
        &self.shared
    }

    pub async fn pool_for(&self, tenant: &TenantContext) -> Result<PgPool, RepositoryError> {
        let connection_string = match &tenant.partition {
            TenantPartition::Shared => return Ok(self.shared.clone()),
            TenantPartition::Dedicated { connection_string } => connection_string,
        };

        let slot = self.slot(connection_string);
        let pool = slot
            .get_or_try_init(|| self.open_dedicated(tenant, connection_string))
            .await?;
        Ok(pool.clone())
    }

    fn slot(&self, connection_string: &str) -> DedicatedSlot {
        if let Some(slot) = self
            .dedicated
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(connection_string)
        {
            return slot.clone();
        }

        self.dedicated
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(connection_string.to_string())
            .or_default()
            .clone()
    }

    async fn open_dedicated(
        &self,
        tenant: &TenantContext,
        connection_string: &str,
    ) -> Result<PgPool, RepositoryError> {
        let connect_options = dedicated_connect_options(connection_string).map_err(|_| {
            tracing::error!(
                "Invalid connection string for dedicated tenant {}",
                tenant.tenant_id
            );
            RepositoryError::DatabaseError
        })?;
        let pool = self.options.clone().connect_lazy_with(connect_options);

        run_migrations(&pool).await.map_err(|_| {
            tracing::error!(
                "Schema of dedicated tenant {} could not be brought up to date",
                tenant.tenant_id
            );
            RepositoryError::DatabaseError
        })?;

        tracing::info!("Opened dedicated pool for tenant {}", tenant.tenant_id);
        Ok(pool)
    }

    /// Dedicated pools that are open and migrated.
    pub fn dedicated_count(&self) -> usize {
        self.dedicated
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }
}
