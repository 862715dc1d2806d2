use std::sync::Arc;

use logger::TracingLogger;
use persistence::kutipan::repository::KutipanRepositoryPostgres;
use persistence::partition::TenantPools;
use persistence::tabung::repository::TabungRepositoryPostgres;
use persistence::tabung_type::repository::TabungTypeRepositoryPostgres;

use business::application::crud::CrudService;
use business::application::kutipan::list_by_tabung::ListKutipanByTabungUseCaseImpl;
use business::application::kutipan::rules::KutipanRules;
use business::application::tabung::rules::TabungRules;
use business::application::tabung_type::rules::TabungTypeRules;
use business::domain::crud::CrudRepository;
use business::domain::kutipan::model::Kutipan;
use business::domain::kutipan::repository::KutipanRepository;
use business::domain::logger::Logger;
use business::domain::tabung::model::Tabung;
use business::domain::tabung::repository::TabungRepository;
use business::domain::tabung_type::model::TabungType;

use crate::api::kutipan::routes::KutipanApi;
use crate::api::tabung::routes::TabungApi;
use crate::api::tabung_type::routes::TabungTypeApi;

pub struct DependencyContainer {
    pub tabung_type_api: TabungTypeApi,
    pub tabung_api: TabungApi,
    pub kutipan_api: KutipanApi,
}

impl DependencyContainer {
    /// Production wiring over the Postgres repositories.
    pub fn from_pools(pools: Arc<TenantPools>) -> Self {
        Self::new(
            Arc::new(TabungTypeRepositoryPostgres::new(pools.clone())),
            Arc::new(TabungRepositoryPostgres::new(pools.clone())),
            Arc::new(KutipanRepositoryPostgres::new(pools)),
            Arc::new(TracingLogger),
        )
    }

    pub fn new<TT, T, K>(
        tabung_types: Arc<TT>,
        tabung: Arc<T>,
        kutipan: Arc<K>,
        logger: Arc<dyn Logger>,
    ) -> Self
    where
        TT: CrudRepository<TabungType> + 'static,
        T: TabungRepository + 'static,
        K: KutipanRepository + 'static,
    {
        let tabung_type_service = Arc::new(CrudService::<TabungType> {
            repository: tabung_types.clone(),
            rules: Arc::new(TabungTypeRules {
                tabung: tabung.clone(),
            }),
            logger: logger.clone(),
        });

        let tabung_service = Arc::new(CrudService::<Tabung> {
            repository: tabung.clone(),
            rules: Arc::new(TabungRules { tabung_types }),
            logger: logger.clone(),
        });

        let kutipan_service = Arc::new(CrudService::<Kutipan> {
            repository: kutipan.clone(),
            rules: Arc::new(KutipanRules {
                tabung: tabung.clone(),
            }),
            logger: logger.clone(),
        });
        let list_by_tabung_use_case = Arc::new(ListKutipanByTabungUseCaseImpl {
            repository: kutipan,
            tabung,
            logger,
        });

        Self {
            tabung_type_api: TabungTypeApi::new(tabung_type_service),
            tabung_api: TabungApi::new(tabung_service),
            kutipan_api: KutipanApi::new(kutipan_service, list_by_tabung_use_case),
        }
    }

    pub fn into_api(self) -> (TabungTypeApi, TabungApi, KutipanApi) {
        (self.tabung_type_api, self.tabung_api, self.kutipan_api)
    }
}
