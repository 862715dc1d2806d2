use async_trait::async_trait;

use crate::domain::crud::CrudRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::tenant::model::TenantContext;

use super::model::Cadangan;
use super::value_objects::CadanganType;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CadanganFilter {
    pub cadangan_type: Option<CadanganType>,
    pub is_open: Option<bool>,
}

impl CadanganFilter {
    pub fn is_empty(&self) -> bool {
        self.cadangan_type.is_none() && self.is_open.is_none()
    }
}

#[async_trait]
pub trait CadanganRepository: CrudRepository<Cadangan> {
    async fn find(
        &self,
        tenant: &TenantContext,
        filter: CadanganFilter,
    ) -> Result<Vec<Cadangan>, RepositoryError>;
}
