use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use poem::http::HeaderMap;
use serde::Deserialize;

use crate::config::auth_config::AuthConfig;
use crate::middleware::auth::{AuthRejection, Principal, TokenValidator, bearer_token};

const CACHE_TTL: Duration = Duration::from_secs(3600);
/// Minimum age of the cached key set before an unknown `kid` triggers a refetch.
const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    iss: Option<String>,
}

/// Where the published signing keys come from.
#[async_trait]
pub trait KeySource: Send + Sync {
    async fn fetch(&self) -> Result<JwkSet, AuthRejection>;
}

/// Fetches a JWKS document over HTTP.
pub struct HttpKeySource {
    client: reqwest::Client,
    url: String,
}

impl HttpKeySource {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl KeySource for HttpKeySource {
    async fn fetch(&self) -> Result<JwkSet, AuthRejection> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                tracing::error!("auth.jwks_fetch_failed: {e}");
                AuthRejection::KeysUnavailable
            })?;

        response.json::<JwkSet>().await.map_err(|e| {
            tracing::error!("auth.jwks_parse_failed: {e}");
            AuthRejection::KeysUnavailable
        })
    }
}

struct CachedKeys {
    keys: JwkSet,
    fetched_at: Instant,
}

/// Validates RS256 bearer tokens against the keys published in a JWKS
/// document. Keys are cached for an hour; a token signed with a key the
/// cache does not know forces one refetch, at most every
/// [`MIN_REFRESH_INTERVAL`].
pub struct JwksTokenValidator {
    source: Arc<dyn KeySource>,
    issuer: Option<String>,
    audience: Option<String>,
    min_refresh_interval: Duration,
    cache: RwLock<Option<CachedKeys>>,
}

impl JwksTokenValidator {
    pub fn new(jwks_url: String, issuer: Option<String>, audience: Option<String>) -> Self {
        Self::with_source(Arc::new(HttpKeySource::new(jwks_url)), issuer, audience)
    }

    pub fn with_source(
        source: Arc<dyn KeySource>,
        issuer: Option<String>,
        audience: Option<String>,
    ) -> Self {
        Self {
            source,
            issuer,
            audience,
            min_refresh_interval: MIN_REFRESH_INTERVAL,
            cache: RwLock::new(None),
        }
    }

    pub fn min_refresh_interval(mut self, interval: Duration) -> Self {
        self.min_refresh_interval = interval;
        self
    }

    /// `None` when no JWKS URL is configured.
    pub fn from_config(config: &AuthConfig) -> Option<Self> {
        let jwks_url = config.jwks_url.clone()?;
        Some(Self::new(
            jwks_url,
            config.issuer.clone(),
            config.audience.clone(),
        ))
    }

    /// Cached keys and their age, if any.
    fn cached(&self) -> Option<(JwkSet, Duration)> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache
            .as_ref()
            .map(|cached| (cached.keys.clone(), cached.fetched_at.elapsed()))
    }

    async fn refresh(&self) -> Result<JwkSet, AuthRejection> {
        let keys = self.source.fetch().await?;

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        *cache = Some(CachedKeys {
            keys: keys.clone(),
            fetched_at: Instant::now(),
        });
        Ok(keys)
    }

    async fn keys_for(&self, kid: &str) -> Result<JwkSet, AuthRejection> {
        match self.cached() {
            Some((keys, age)) if age < CACHE_TTL => {
                if keys.find(kid).is_some() || age < self.min_refresh_interval {
                    return Ok(keys);
                }
                tracing::info!("Signing key {kid} not cached, refetching key set");
                self.refresh().await
            }
            _ => self.refresh().await,
        }
    }

    fn verify(&self, token: &str, keys: &JwkSet) -> Result<Principal, AuthRejection> {
        let kid = token_kid(token)?;
        let jwk = keys.find(&kid).ok_or(AuthRejection::UnknownKid)?;
        let decoding_key = DecodingKey::from_jwk(jwk).map_err(|_| AuthRejection::UnknownKid)?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = true;
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
        }
        match &self.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
            tracing::debug!("auth.token_validation_failed: {e}");
            AuthRejection::InvalidToken
        })?;

        Ok(Principal {
            subject: token_data.claims.sub,
            issuer: token_data.claims.iss,
        })
    }
}

fn token_kid(token: &str) -> Result<String, AuthRejection> {
    let header = decode_header(token).map_err(|_| AuthRejection::InvalidHeader)?;
    header.kid.ok_or(AuthRejection::MissingKid)
}

#[async_trait]
impl TokenValidator for JwksTokenValidator {
    async fn validate(&self, headers: &HeaderMap) -> Result<Principal, AuthRejection> {
        let token = bearer_token(headers).ok_or(AuthRejection::MissingToken)?;
        let kid = token_kid(token)?;
        let keys = self.keys_for(&kid).await?;
        self.verify(token, &keys)
    }
}
