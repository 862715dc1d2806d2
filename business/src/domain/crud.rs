//! Generic layering shared by every resource family.
//!
//! A family plugs in by implementing [`Resource`] for its model, providing a
//! [`CrudRepository`] adapter and, for the fund family, a set of
//! [`BusinessRules`]. The service itself is written once in
//! `application::crud`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::TenantId;
use crate::domain::tenant::model::TenantContext;

/// A tenant-owned record managed through the generic CRUD service.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Input accepted on creation.
    type Draft: Send + 'static;
    /// Partial update accepted on modification.
    type Patch: Send + 'static;
    type Error: From<RepositoryError> + std::error::Error + Send + 'static;

    /// Code-style name used in log lines, e.g. `tabung`.
    const KIND: &'static str;

    fn id(&self) -> Uuid;

    /// Validates the draft and builds a new record owned by `tenant_id`.
    fn create(tenant_id: TenantId, draft: Self::Draft) -> Result<Self, Self::Error>;

    /// Validates the patch and returns the updated record.
    fn apply(self, patch: Self::Patch) -> Result<Self, Self::Error>;

    fn not_found() -> Self::Error;
}

/// Data access scoped to the tenant of the current request.
#[async_trait]
pub trait CrudRepository<T>: Send + Sync {
    async fn list(&self, tenant: &TenantContext) -> Result<Vec<T>, RepositoryError>;
    async fn get_by_id(&self, tenant: &TenantContext, id: Uuid) -> Result<T, RepositoryError>;
    async fn insert(&self, tenant: &TenantContext, record: &T) -> Result<(), RepositoryError>;
    /// Fails with `NotFound` when no row of this tenant matches.
    async fn update(&self, tenant: &TenantContext, record: &T) -> Result<(), RepositoryError>;
    /// Fails with `NotFound` when no row of this tenant matches.
    async fn delete(&self, tenant: &TenantContext, id: Uuid) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ResourceService<T: Resource>: Send + Sync {
    async fn list(&self, tenant: &TenantContext) -> Result<Vec<T>, T::Error>;
    async fn get(&self, tenant: &TenantContext, id: Uuid) -> Result<T, T::Error>;
    async fn create(&self, tenant: &TenantContext, draft: T::Draft) -> Result<T, T::Error>;
    async fn update(
        &self,
        tenant: &TenantContext,
        id: Uuid,
        patch: T::Patch,
    ) -> Result<T, T::Error>;
    async fn delete(&self, tenant: &TenantContext, id: Uuid) -> Result<(), T::Error>;
}

/// Checks that need other records (referential consistency, periods, ...).
#[async_trait]
pub trait BusinessRules<T: Resource>: Send + Sync {
    async fn before_save(&self, tenant: &TenantContext, record: &T) -> Result<(), T::Error>;

    async fn before_delete(&self, _tenant: &TenantContext, _record: &T) -> Result<(), T::Error> {
        Ok(())
    }
}

/// Rules for families whose records are self-contained.
pub struct NoRules;

#[async_trait]
impl<T: Resource> BusinessRules<T> for NoRules {
    async fn before_save(&self, _tenant: &TenantContext, _record: &T) -> Result<(), T::Error> {
        Ok(())
    }
}
