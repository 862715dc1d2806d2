use std::sync::Arc;

use business::domain::cadangan::repository::CadanganRepository;
use business::domain::logger::Logger;
use logger::TracingLogger;
use persistence::cadangan::repository::CadanganRepositoryPostgres;
use persistence::partition::TenantPools;

use crate::api::cadangan::routes::CadanganApi;

pub struct DependencyContainer {
    pub cadangan_api: CadanganApi,
}

impl DependencyContainer {
    pub fn from_pools(pools: Arc<TenantPools>) -> Self {
        Self::new(
            Arc::new(CadanganRepositoryPostgres::new(pools)),
            Arc::new(TracingLogger),
        )
    }

    pub fn new<R: CadanganRepository + 'static>(
        repository: Arc<R>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            cadangan_api: CadanganApi::new(repository, logger),
        }
    }
}
