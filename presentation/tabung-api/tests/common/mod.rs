//! In-memory wiring of the tabung service behind the real middleware chain.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use api_core::config::stage::StagePosture;
use api_core::middleware::auth::{AuthRejection, Principal, TokenValidator, bearer_token};
use api_core::middleware::chain::{ChainSettings, build_app};
use api_core::middleware::tenant::TenantSource;
use async_trait::async_trait;
use business::application::tenant::registry::TenantRegistry;
use business::domain::crud::CrudRepository;
use business::domain::errors::RepositoryError;
use business::domain::kutipan::model::Kutipan;
use business::domain::kutipan::repository::{CollectionRange, KutipanRepository};
use business::domain::shared::value_objects::TenantId;
use business::domain::tabung::model::Tabung;
use business::domain::tabung::repository::TabungRepository;
use business::domain::tabung_type::model::TabungType;
use business::domain::tenant::model::{Tenant, TenantContext};
use business::domain::tenant::repository::TenantStore;
use logger::TracingLogger;
use poem::endpoint::BoxEndpoint;
use poem::http::HeaderMap;
use poem::test::{TestClient, TestResponse};
use serde_json::Value;
use tabung_api::MANIFEST;
use tabung_api::setup::dependency_injection::DependencyContainer;
use uuid::Uuid;

pub const TENANT_A: &str = "masjid-a";
pub const TENANT_B: &str = "masjid-b";
pub const TOKEN: &str = "Bearer valid-token";

pub trait Owned {
    fn owner(&self) -> &TenantId;
    fn key(&self) -> Uuid;
}

impl Owned for TabungType {
    fn owner(&self) -> &TenantId {
        &self.tenant_id
    }
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Owned for Tabung {
    fn owner(&self) -> &TenantId {
        &self.tenant_id
    }
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Owned for Kutipan {
    fn owner(&self) -> &TenantId {
        &self.tenant_id
    }
    fn key(&self) -> Uuid {
        self.id
    }
}

/// Rows of every tenant in one map; each call is counted.
pub struct InMemory<T> {
    rows: Mutex<Vec<T>>,
    fault: Mutex<Option<RepositoryError>>,
    write_fault: Mutex<Option<RepositoryError>>,
    pub calls: AtomicUsize,
}

impl<T: Owned + Clone> InMemory<T> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fault: Mutex::new(None),
            write_fault: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The next repository call fails with `err`; later calls behave normally.
    pub fn fail_next(&self, err: RepositoryError) {
        *self.fault.lock().unwrap() = Some(err);
    }

    /// Like `fail_next`, but reads pass and only the next write fails.
    pub fn fail_next_write(&self, err: RepositoryError) {
        *self.write_fault.lock().unwrap() = Some(err);
    }

    fn injected(&self) -> Result<(), RepositoryError> {
        match self.fault.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn injected_write(&self) -> Result<(), RepositoryError> {
        self.injected()?;
        match self.write_fault.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn scoped(&self, tenant: &TenantContext) -> Vec<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.owner() == &tenant.tenant_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl<T: Owned + Clone + Send + Sync + 'static> CrudRepository<T> for InMemory<T> {
    async fn list(&self, tenant: &TenantContext) -> Result<Vec<T>, RepositoryError> {
        self.injected()?;
        Ok(self.scoped(tenant))
    }

    async fn get_by_id(&self, tenant: &TenantContext, id: Uuid) -> Result<T, RepositoryError> {
        self.injected()?;
        self.scoped(tenant)
            .into_iter()
            .find(|row| row.key() == id)
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, tenant: &TenantContext, record: &T) -> Result<(), RepositoryError> {
        self.injected_write()?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(record.owner(), &tenant.tenant_id);
        self.rows.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn update(&self, tenant: &TenantContext, record: &T) -> Result<(), RepositoryError> {
        self.injected_write()?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.key() == record.key() && row.owner() == &tenant.tenant_id)
            .ok_or(RepositoryError::NotFound)?;
        *row = record.clone();
        Ok(())
    }

    async fn delete(&self, tenant: &TenantContext, id: Uuid) -> Result<(), RepositoryError> {
        self.injected_write()?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| !(row.key() == id && row.owner() == &tenant.tenant_id));
        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl TabungRepository for InMemory<Tabung> {
    async fn count_by_type(
        &self,
        tenant: &TenantContext,
        tabung_type_id: Uuid,
    ) -> Result<u64, RepositoryError> {
        self.injected()?;
        Ok(self
            .scoped(tenant)
            .iter()
            .filter(|t| t.tabung_type_id == tabung_type_id)
            .count() as u64)
    }
}

#[async_trait]
impl KutipanRepository for InMemory<Kutipan> {
    async fn list_by_tabung(
        &self,
        tenant: &TenantContext,
        tabung_id: Uuid,
        range: CollectionRange,
    ) -> Result<Vec<Kutipan>, RepositoryError> {
        self.injected()?;
        let mut entries: Vec<Kutipan> = self
            .scoped(tenant)
            .into_iter()
            .filter(|k| k.tabung_id == tabung_id)
            .filter(|k| range.from.is_none_or(|from| k.collected_at >= from))
            .filter(|k| range.to.is_none_or(|to| k.collected_at <= to))
            .collect();
        entries.sort_by_key(|k| k.collected_at);
        Ok(entries)
    }
}

pub struct CountingTenantStore {
    tenants: HashMap<String, Tenant>,
    pub calls: AtomicUsize,
}

impl CountingTenantStore {
    pub fn new() -> Self {
        let tenants = [TENANT_A, TENANT_B]
            .into_iter()
            .map(|name| {
                let tenant = Tenant::from_repository(
                    TenantId::new(format!("{}-id", name)),
                    name.to_string(),
                    name.to_uppercase(),
                    None,
                    true,
                );
                (name.to_string(), tenant)
            })
            .collect();

        Self {
            tenants,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TenantStore for CountingTenantStore {
    async fn find(&self, key: &str) -> Result<Option<Tenant>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.tenants.get(key).cloned())
    }
}

pub struct StubValidator;

#[async_trait]
impl TokenValidator for StubValidator {
    async fn validate(&self, headers: &HeaderMap) -> Result<Principal, AuthRejection> {
        match bearer_token(headers) {
            Some("valid-token") => Ok(Principal {
                subject: "bendahari".to_string(),
                issuer: None,
            }),
            Some(_) => Err(AuthRejection::InvalidToken),
            None => Err(AuthRejection::MissingToken),
        }
    }
}

pub struct TestApp {
    pub client: TestClient<BoxEndpoint<'static>>,
    pub tabung_types: Arc<InMemory<TabungType>>,
    pub tabung: Arc<InMemory<Tabung>>,
    pub kutipan: Arc<InMemory<Kutipan>>,
    pub tenants: Arc<CountingTenantStore>,
}

impl TestApp {
    pub fn new(posture: StagePosture) -> Self {
        let tabung_types = Arc::new(InMemory::new());
        let tabung = Arc::new(InMemory::new());
        let kutipan = Arc::new(InMemory::new());
        let tenants = Arc::new(CountingTenantStore::new());

        let container = DependencyContainer::new(
            tabung_types.clone(),
            tabung.clone(),
            kutipan.clone(),
            Arc::new(TracingLogger),
        );
        let registry = Arc::new(TenantRegistry::new(
            tenants.clone(),
            Duration::from_secs(60),
            Arc::new(TracingLogger),
        ));

        let app = build_app(
            container.into_api(),
            ChainSettings {
                manifest: MANIFEST,
                posture,
                allowed_origins: vec!["https://masjid.example".to_string()],
                tenant_source: TenantSource::default(),
                registry,
                validator: Some(Arc::new(StubValidator)),
            },
        )
        .unwrap();

        Self {
            client: TestClient::new(app),
            tabung_types,
            tabung,
            kutipan,
            tenants,
        }
    }

    pub fn documented() -> Self {
        Self::new(StagePosture::Documented)
    }

    pub fn repository_calls(&self) -> usize {
        self.tabung_types.calls() + self.tabung.calls() + self.kutipan.calls()
    }

    pub async fn get(&self, tenant: &str, uri: &str) -> TestResponse {
        self.client
            .get(uri)
            .header("__tenant", tenant)
            .header("authorization", TOKEN)
            .send()
            .await
    }

    pub async fn post(&self, tenant: &str, uri: &str, body: Value) -> TestResponse {
        self.client
            .post(uri)
            .header("__tenant", tenant)
            .header("authorization", TOKEN)
            .body_json(&body)
            .send()
            .await
    }

    pub async fn put(&self, tenant: &str, uri: &str, body: Value) -> TestResponse {
        self.client
            .put(uri)
            .header("__tenant", tenant)
            .header("authorization", TOKEN)
            .body_json(&body)
            .send()
            .await
    }

    pub async fn delete(&self, tenant: &str, uri: &str) -> TestResponse {
        self.client
            .delete(uri)
            .header("__tenant", tenant)
            .header("authorization", TOKEN)
            .send()
            .await
    }

    /// Creates a type and a fund under it, returning the fund id.
    pub async fn seed_tabung(&self, tenant: &str, body: Value) -> String {
        let tabung_type = body_of(
            self.post(
                tenant,
                "/tabung-type",
                serde_json::json!({ "name": "Infaq Jumaat" }),
            )
            .await,
        )
        .await;

        let mut body = body;
        body["tabung_type_id"] = tabung_type["id"].clone();
        let tabung = body_of(self.post(tenant, "/tabung", body).await).await;
        tabung["id"].as_str().unwrap().to_string()
    }
}

pub async fn body_of(resp: TestResponse) -> Value {
    resp.0.into_body().into_json::<Value>().await.unwrap()
}
