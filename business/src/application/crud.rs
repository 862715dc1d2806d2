use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::crud::{BusinessRules, CrudRepository, Resource, ResourceService};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::tenant::model::TenantContext;

/// The single service implementation behind every fund-family controller.
pub struct CrudService<T: Resource> {
    pub repository: Arc<dyn CrudRepository<T>>,
    pub rules: Arc<dyn BusinessRules<T>>,
    pub logger: Arc<dyn Logger>,
}

impl<T: Resource> CrudService<T> {
    fn map_missing(err: RepositoryError) -> T::Error {
        match err {
            RepositoryError::NotFound => T::not_found(),
            other => other.into(),
        }
    }
}

#[async_trait]
impl<T: Resource> ResourceService<T> for CrudService<T> {
    async fn list(&self, tenant: &TenantContext) -> Result<Vec<T>, T::Error> {
        self.logger.info(&format!(
            "Listing {} for tenant {}",
            T::KIND,
            tenant.tenant_id
        ));
        let records = self.repository.list(tenant).await?;
        self.logger
            .debug(&format!("Retrieved {} {} records", records.len(), T::KIND));
        Ok(records)
    }

    async fn get(&self, tenant: &TenantContext, id: Uuid) -> Result<T, T::Error> {
        self.logger.info(&format!("Fetching {} {}", T::KIND, id));
        self.repository
            .get_by_id(tenant, id)
            .await
            .map_err(Self::map_missing)
    }

    async fn create(&self, tenant: &TenantContext, draft: T::Draft) -> Result<T, T::Error> {
        let record = T::create(tenant.tenant_id.clone(), draft)?;
        self.rules.before_save(tenant, &record).await?;
        self.repository.insert(tenant, &record).await?;

        self.logger.info(&format!(
            "Created {} {} for tenant {}",
            T::KIND,
            record.id(),
            tenant.tenant_id
        ));
        Ok(record)
    }

    async fn update(
        &self,
        tenant: &TenantContext,
        id: Uuid,
        patch: T::Patch,
    ) -> Result<T, T::Error> {
        self.logger.info(&format!("Updating {} {}", T::KIND, id));

        let existing = self
            .repository
            .get_by_id(tenant, id)
            .await
            .map_err(Self::map_missing)?;
        let updated = existing.apply(patch)?;
        self.rules.before_save(tenant, &updated).await?;
        self.repository
            .update(tenant, &updated)
            .await
            .map_err(Self::map_missing)?;

        Ok(updated)
    }

    async fn delete(&self, tenant: &TenantContext, id: Uuid) -> Result<(), T::Error> {
        self.logger.info(&format!("Deleting {} {}", T::KIND, id));

        let existing = self
            .repository
            .get_by_id(tenant, id)
            .await
            .map_err(Self::map_missing)?;
        self.rules.before_delete(tenant, &existing).await?;
        self.repository
            .delete(tenant, id)
            .await
            .map_err(Self::map_missing)?;

        self.logger.info(&format!("Deleted {} {}", T::KIND, id));
        Ok(())
    }
}
