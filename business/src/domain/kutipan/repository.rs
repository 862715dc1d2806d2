use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::crud::CrudRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::tenant::model::TenantContext;

use super::model::Kutipan;

/// Inclusive bounds on `collected_at`; `None` leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollectionRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait KutipanRepository: CrudRepository<Kutipan> {
    /// Entries of one fund ordered by `collected_at`, oldest first.
    async fn list_by_tabung(
        &self,
        tenant: &TenantContext,
        tabung_id: Uuid,
        range: CollectionRange,
    ) -> Result<Vec<Kutipan>, RepositoryError>;
}
