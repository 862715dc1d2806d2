use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::crud::CrudRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::kutipan::errors::KutipanError;
use crate::domain::kutipan::repository::KutipanRepository;
use crate::domain::kutipan::use_cases::list_by_tabung::{
    ListKutipanByTabungParams, ListKutipanByTabungUseCase, TabungCollection,
};
use crate::domain::logger::Logger;
use crate::domain::tabung::model::Tabung;
use crate::domain::tenant::model::TenantContext;

pub struct ListKutipanByTabungUseCaseImpl {
    pub repository: Arc<dyn KutipanRepository>,
    pub tabung: Arc<dyn CrudRepository<Tabung>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListKutipanByTabungUseCase for ListKutipanByTabungUseCaseImpl {
    async fn execute(
        &self,
        tenant: &TenantContext,
        params: ListKutipanByTabungParams,
    ) -> Result<TabungCollection, KutipanError> {
        if let (Some(from), Some(to)) = (params.range.from, params.range.to)
            && to < from
        {
            return Err(KutipanError::InvalidRange);
        }

        self.logger.info(&format!(
            "Listing kutipan for tabung {}",
            params.tabung_id
        ));

        // An unknown fund is a 404, not an empty list.
        self.tabung
            .get_by_id(tenant, params.tabung_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => KutipanError::TabungNotFound,
                other => KutipanError::Repository(other),
            })?;

        let entries = self
            .repository
            .list_by_tabung(tenant, params.tabung_id, params.range)
            .await?;
        let total_sen = entries.iter().map(|k| k.amount_sen).sum();

        self.logger.info(&format!(
            "Retrieved {} kutipan for tabung {}",
            entries.len(),
            params.tabung_id
        ));
        Ok(TabungCollection {
            tabung_id: params.tabung_id,
            entries,
            total_sen,
        })
    }
}
