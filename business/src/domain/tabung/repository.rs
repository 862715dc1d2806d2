use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::crud::CrudRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::tenant::model::TenantContext;

use super::model::Tabung;

#[async_trait]
pub trait TabungRepository: CrudRepository<Tabung> {
    /// Number of funds of this tenant classified under `tabung_type_id`.
    async fn count_by_type(
        &self,
        tenant: &TenantContext,
        tabung_type_id: Uuid,
    ) -> Result<u64, RepositoryError>;
}
