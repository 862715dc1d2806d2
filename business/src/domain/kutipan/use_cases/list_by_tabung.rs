use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::kutipan::errors::KutipanError;
use crate::domain::kutipan::model::Kutipan;
use crate::domain::kutipan::repository::CollectionRange;
use crate::domain::tenant::model::TenantContext;

pub struct ListKutipanByTabungParams {
    pub tabung_id: Uuid,
    pub range: CollectionRange,
}

/// Entries of a fund together with their total.
#[derive(Debug, Clone)]
pub struct TabungCollection {
    pub tabung_id: Uuid,
    pub entries: Vec<Kutipan>,
    pub total_sen: i64,
}

#[async_trait]
pub trait ListKutipanByTabungUseCase: Send + Sync {
    async fn execute(
        &self,
        tenant: &TenantContext,
        params: ListKutipanByTabungParams,
    ) -> Result<TabungCollection, KutipanError>;
}
