use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::crud::{BusinessRules, CrudRepository};
use crate::domain::errors::RepositoryError;
use crate::domain::tabung::errors::TabungError;
use crate::domain::tabung::model::Tabung;
use crate::domain::tabung_type::model::TabungType;
use crate::domain::tenant::model::TenantContext;

/// A fund must be classified under a type that exists for the same tenant.
pub struct TabungRules {
    pub tabung_types: Arc<dyn CrudRepository<TabungType>>,
}

#[async_trait]
impl BusinessRules<Tabung> for TabungRules {
    async fn before_save(&self, tenant: &TenantContext, record: &Tabung) -> Result<(), TabungError> {
        match self
            .tabung_types
            .get_by_id(tenant, record.tabung_type_id)
            .await
        {
            Ok(_) => Ok(()),
            Err(RepositoryError::NotFound) => Err(TabungError::TabungTypeNotFound),
            Err(other) => Err(TabungError::Repository(other)),
        }
    }
}
