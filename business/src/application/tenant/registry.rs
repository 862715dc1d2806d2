use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use crate::domain::logger::Logger;
use crate::domain::tenant::errors::TenantError;
use crate::domain::tenant::model::{Tenant, TenantContext};
use crate::domain::tenant::repository::TenantStore;

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

struct CachedTenant {
    tenant: Tenant,
    fetched_at: Instant,
}

/// Resolves request identifiers to tenants.
///
/// Metadata is fetched lazily from the [`TenantStore`] and kept for `ttl`.
/// The cache lock is never held while the store is queried, so two requests
/// for the same cold tenant may both hit the store; the last write wins.
pub struct TenantRegistry {
    store: Arc<dyn TenantStore>,
    cache: RwLock<HashMap<String, CachedTenant>>,
    ttl: Duration,
    logger: Arc<dyn Logger>,
}

impl TenantRegistry {
    pub fn new(store: Arc<dyn TenantStore>, ttl: Duration, logger: Arc<dyn Logger>) -> Self {
        Self {
            store,
            cache: RwLock::new(HashMap::new()),
            ttl,
            logger,
        }
    }

    /// The identifier goes to the store as given (trimmed); the cache is
    /// keyed case-insensitively, matching the store's lookup.
    pub async fn resolve(&self, identifier: Option<&str>) -> Result<TenantContext, TenantError> {
        let identifier = identifier
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(TenantError::Missing)?;
        let key = identifier.to_lowercase();

        let tenant = match self.cached(&key) {
            Some(tenant) => tenant,
            None => self.load(identifier, key).await?,
        };

        if !tenant.is_active {
            self.logger
                .warn(&format!("Rejected request for inactive tenant {}", identifier));
            return Err(TenantError::Inactive);
        }
        Ok(TenantContext::for_request(&tenant))
    }

    /// Drops the cached entry so the next request reloads it from the store.
    pub fn invalidate(&self, identifier: &str) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&identifier.trim().to_lowercase());
    }

    fn cached(&self, key: &str) -> Option<Tenant> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache
            .get(key)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.tenant.clone())
    }

    async fn load(&self, identifier: &str, key: String) -> Result<Tenant, TenantError> {
        self.logger
            .debug(&format!("Loading tenant {} from store", identifier));

        let tenant = match self.store.find(identifier).await {
            Ok(Some(tenant)) => tenant,
            Ok(None) => {
                self.logger.info(&format!("Unknown tenant {}", identifier));
                return Err(TenantError::NotFound);
            }
            Err(e) => {
                self.logger
                    .error(&format!("Tenant lookup for {} failed: {}", identifier, e));
                return Err(TenantError::Lookup(e));
            }
        };

        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                key,
                CachedTenant {
                    tenant: tenant.clone(),
                    fetched_at: Instant::now(),
                },
            );
        Ok(tenant)
    }
}
