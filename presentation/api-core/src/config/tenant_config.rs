use std::time::Duration;

use business::application::tenant::registry::DEFAULT_CACHE_TTL;

/// How requests name their tenant and how long tenant metadata is cached.
#[derive(Debug, Clone)]
pub struct TenantConfig {
    /// With `masjid.example`, a request to `al-falah.masjid.example` names
    /// tenant `al-falah`.
    pub base_domain: Option<String>,
    pub cache_ttl: Duration,
}

impl Default for TenantConfig {
    fn default() -> Self {
        Self {
            base_domain: None,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}
