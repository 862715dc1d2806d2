use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::crud::BusinessRules;
use crate::domain::tabung::repository::TabungRepository;
use crate::domain::tabung_type::errors::TabungTypeError;
use crate::domain::tabung_type::model::TabungType;
use crate::domain::tenant::model::TenantContext;

/// A type cannot be removed while funds are still classified under it.
pub struct TabungTypeRules {
    pub tabung: Arc<dyn TabungRepository>,
}

#[async_trait]
impl BusinessRules<TabungType> for TabungTypeRules {
    async fn before_save(
        &self,
        _tenant: &TenantContext,
        _record: &TabungType,
    ) -> Result<(), TabungTypeError> {
        Ok(())
    }

    async fn before_delete(
        &self,
        tenant: &TenantContext,
        record: &TabungType,
    ) -> Result<(), TabungTypeError> {
        let in_use = self.tabung.count_by_type(tenant, record.id).await?;
        if in_use > 0 {
            return Err(TabungTypeError::InUse);
        }
        Ok(())
    }
}
