use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Tenant;

/// Source of tenant metadata, usually the shared database.
#[async_trait]
pub trait TenantStore: Send + Sync {
    /// Looks a tenant up by its id or its unique name.
    async fn find(&self, key: &str) -> Result<Option<Tenant>, RepositoryError>;
}
