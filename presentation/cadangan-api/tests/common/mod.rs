#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use api_core::config::stage::StagePosture;
use api_core::middleware::auth::{AuthRejection, Principal, TokenValidator, bearer_token};
use api_core::middleware::chain::{ChainSettings, build_app};
use api_core::middleware::tenant::TenantSource;
use async_trait::async_trait;
use business::application::tenant::registry::TenantRegistry;
use business::domain::cadangan::model::Cadangan;
use business::domain::cadangan::repository::{CadanganFilter, CadanganRepository};
use business::domain::crud::CrudRepository;
use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::shared::value_objects::TenantId;
use business::domain::tenant::model::{Tenant, TenantContext};
use business::domain::tenant::repository::TenantStore;
use cadangan_api::MANIFEST;
use cadangan_api::setup::dependency_injection::DependencyContainer;
use logger::TracingLogger;
use poem::endpoint::BoxEndpoint;
use poem::http::HeaderMap;
use poem::test::{TestClient, TestResponse};
use serde_json::Value;
use uuid::Uuid;

pub const TENANT_A: &str = "masjid-a";
pub const TENANT_B: &str = "masjid-b";
pub const ORIGIN: &str = "https://masjid.example";

#[derive(Default)]
pub struct InMemoryCadangan {
    rows: Mutex<Vec<Cadangan>>,
    fault: Mutex<Option<RepositoryError>>,
    pub calls: AtomicUsize,
}

impl InMemoryCadangan {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The next repository call fails with `err`.
    pub fn fail_next(&self, err: RepositoryError) {
        *self.fault.lock().unwrap() = Some(err);
    }

    fn injected(&self) -> Result<(), RepositoryError> {
        match self.fault.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn scoped(&self, tenant: &TenantContext) -> Vec<Cadangan> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.tenant_id == tenant.tenant_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CrudRepository<Cadangan> for InMemoryCadangan {
    async fn list(&self, tenant: &TenantContext) -> Result<Vec<Cadangan>, RepositoryError> {
        self.injected()?;
        Ok(self.scoped(tenant))
    }

    async fn get_by_id(
        &self,
        tenant: &TenantContext,
        id: Uuid,
    ) -> Result<Cadangan, RepositoryError> {
        self.injected()?;
        self.scoped(tenant)
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(
        &self,
        _tenant: &TenantContext,
        record: &Cadangan,
    ) -> Result<(), RepositoryError> {
        self.injected()?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn update(&self, tenant: &TenantContext, record: &Cadangan) -> Result<(), RepositoryError> {
        self.injected()?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|c| c.id == record.id && c.tenant_id == tenant.tenant_id)
            .ok_or(RepositoryError::NotFound)?;
        *row = record.clone();
        Ok(())
    }

    async fn delete(&self, tenant: &TenantContext, id: Uuid) -> Result<(), RepositoryError> {
        self.injected()?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| !(c.id == id && c.tenant_id == tenant.tenant_id));
        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CadanganRepository for InMemoryCadangan {
    async fn find(
        &self,
        tenant: &TenantContext,
        filter: CadanganFilter,
    ) -> Result<Vec<Cadangan>, RepositoryError> {
        self.injected()?;
        Ok(self
            .scoped(tenant)
            .into_iter()
            .filter(|c| filter.cadangan_type.is_none_or(|t| c.cadangan_type == t))
            .filter(|c| filter.is_open.is_none_or(|open| c.is_open == open))
            .collect())
    }
}

pub struct CountingTenantStore {
    pub calls: AtomicUsize,
}

#[async_trait]
impl TenantStore for CountingTenantStore {
    async fn find(&self, key: &str) -> Result<Option<Tenant>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok([TENANT_A, TENANT_B].contains(&key).then(|| {
            Tenant::from_repository(
                TenantId::new(format!("{}-id", key)),
                key.to_string(),
                key.to_uppercase(),
                None,
                true,
            )
        }))
    }
}

/// Keeps every line the service logs.
#[derive(Default)]
pub struct RecordingLogger {
    pub lines: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().unwrap().iter().any(|l| l.contains(needle))
    }

    fn record(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        self.record(message);
    }
    fn warn(&self, message: &str) {
        self.record(message);
    }
    fn error(&self, message: &str) {
        self.record(message);
    }
    fn debug(&self, message: &str) {
        self.record(message);
    }
}

pub struct StubValidator;

#[async_trait]
impl TokenValidator for StubValidator {
    async fn validate(&self, headers: &HeaderMap) -> Result<Principal, AuthRejection> {
        match bearer_token(headers) {
            Some("valid-token") => Ok(Principal {
                subject: "setiausaha".to_string(),
                issuer: None,
            }),
            Some(_) => Err(AuthRejection::InvalidToken),
            None => Err(AuthRejection::MissingToken),
        }
    }
}

pub struct TestApp {
    pub client: TestClient<BoxEndpoint<'static>>,
    pub repository: Arc<InMemoryCadangan>,
    pub tenants: Arc<CountingTenantStore>,
    pub log: Arc<RecordingLogger>,
}

impl TestApp {
    pub fn new(posture: StagePosture) -> Self {
        let repository = Arc::new(InMemoryCadangan::default());
        let log = Arc::new(RecordingLogger::default());
        let tenants = Arc::new(CountingTenantStore {
            calls: AtomicUsize::new(0),
        });
        let registry = Arc::new(TenantRegistry::new(
            tenants.clone(),
            Duration::from_secs(60),
            Arc::new(TracingLogger),
        ));

        let app = build_app(
            DependencyContainer::new(repository.clone(), log.clone()).cadangan_api,
            ChainSettings {
                manifest: MANIFEST,
                posture,
                allowed_origins: vec![ORIGIN.to_string()],
                tenant_source: TenantSource {
                    base_domain: Some("masjid.example".to_string()),
                },
                registry,
                validator: Some(Arc::new(StubValidator)),
            },
        )
        .unwrap();

        Self {
            client: TestClient::new(app),
            repository,
            tenants,
            log,
        }
    }

    pub async fn submit(&self, tenant: &str, body: Value) -> TestResponse {
        self.client
            .post("/cadangan")
            .header("__tenant", tenant)
            .header("authorization", "Bearer valid-token")
            .body_json(&body)
            .send()
            .await
    }

    pub async fn get(&self, tenant: &str, uri: &str) -> TestResponse {
        self.client
            .get(uri)
            .header("__tenant", tenant)
            .header("authorization", "Bearer valid-token")
            .send()
            .await
    }
}

pub async fn body_of(resp: TestResponse) -> Value {
    resp.0.into_body().into_json::<Value>().await.unwrap()
}
