use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::crud::{BusinessRules, CrudRepository};
use crate::domain::errors::RepositoryError;
use crate::domain::kutipan::errors::KutipanError;
use crate::domain::kutipan::model::Kutipan;
use crate::domain::tabung::model::Tabung;
use crate::domain::tenant::model::TenantContext;

/// Collected amounts are never negative and always land inside the period
/// of an existing fund of the same tenant.
pub struct KutipanRules {
    pub tabung: Arc<dyn CrudRepository<Tabung>>,
}

#[async_trait]
impl BusinessRules<Kutipan> for KutipanRules {
    async fn before_save(
        &self,
        tenant: &TenantContext,
        record: &Kutipan,
    ) -> Result<(), KutipanError> {
        if record.amount_sen < 0 {
            return Err(KutipanError::NegativeAmount);
        }

        let tabung = self
            .tabung
            .get_by_id(tenant, record.tabung_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => KutipanError::TabungNotFound,
                other => KutipanError::Repository(other),
            })?;

        if !tabung.accepts_collection_on(record.collected_at) {
            return Err(KutipanError::OutsideTabungPeriod);
        }
        Ok(())
    }
}
