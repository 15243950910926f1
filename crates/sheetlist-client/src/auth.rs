use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use sheetlist_core::{
    keys, CredentialError, CredentialRecord, CredentialSource, ASSERTION_LIFETIME_SECONDS,
    JWT_BEARER_GRANT_TYPE, SPREADSHEETS_SCOPE, TOKEN_EXPIRY_MARGIN_SECONDS,
};
use sheetlist_crypto::{sign_assertion, AssertionClaims};

use crate::types::{TokenRequest, TokenResponse};
use crate::{ClientError, Endpoints};

#[derive(Clone)]
pub struct CachedToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    /// `expires_in` is the issuer-reported lifetime; the cached expiry keeps a
    /// one minute margin before it. `None` when the lifetime does not fit a timestamp.
    pub fn new(value: String, expires_in: i64, now: DateTime<Utc>) -> Option<Self> {
        let lifetime = expires_in.checked_sub(TOKEN_EXPIRY_MARGIN_SECONDS)?;
        let expires_at = now.checked_add_signed(ChronoDuration::try_seconds(lifetime)?)?;
        Some(Self { value, expires_at })
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

impl std::fmt::Debug for CachedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedToken")
            .field("value", &"REDACTED")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Exchanges service-account assertions for bearer tokens and caches the
/// result until shortly before it expires.
///
/// Clones share one cache. Concurrent callers that both miss the cache each
/// run an exchange; whichever finishes last is kept.
#[derive(Clone)]
pub struct TokenManager {
    http: reqwest::Client,
    source: Arc<dyn CredentialSource>,
    endpoints: Endpoints,
    cache: Arc<RwLock<Option<CachedToken>>>,
}

impl TokenManager {
    pub fn new(
        http: reqwest::Client,
        source: Arc<dyn CredentialSource>,
        endpoints: Endpoints,
    ) -> Self {
        Self {
            http,
            source,
            endpoints,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    pub fn http_client(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn source(&self) -> &Arc<dyn CredentialSource> {
        &self.source
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Expiry of the cached token, if any token has been obtained.
    pub async fn cached_expiry(&self) -> Option<DateTime<Utc>> {
        self.cache.read().await.as_ref().map(|token| token.expires_at)
    }

    pub async fn access_token(&self) -> Result<String, ClientError> {
        if let Some(token) = self.cached_token().await {
            return Ok(token);
        }

        let credentials = self.load_credentials()?;
        let claims = AssertionClaims::new(
            credentials.client_email(),
            SPREADSHEETS_SCOPE,
            self.endpoints.token_url.as_str(),
            Utc::now().timestamp(),
            ASSERTION_LIFETIME_SECONDS,
        );
        let assertion = sign_assertion(&claims, credentials.private_key())?;

        let token = self.exchange_assertion(&assertion).await?;
        info!(
            issuer = %credentials.client_email(),
            expires_at = %token.expires_at,
            "obtained access token"
        );
        let value = token.value.clone();
        *self.cache.write().await = Some(token);
        Ok(value)
    }

    async fn cached_token(&self) -> Option<String> {
        let cache = self.cache.read().await;
        cache
            .as_ref()
            .filter(|token| token.is_valid_at(Utc::now()))
            .map(|token| token.value.clone())
    }

    fn load_credentials(&self) -> Result<CredentialRecord, ClientError> {
        let blob = self
            .source
            .get(keys::SERVICE_ACCOUNT_JSON)
            .ok_or(CredentialError::Missing)?;
        Ok(CredentialRecord::parse(&blob)?)
    }

    async fn exchange_assertion(&self, assertion: &str) -> Result<CachedToken, ClientError> {
        let request = TokenRequest {
            grant_type: JWT_BEARER_GRANT_TYPE,
            assertion,
        };
        debug!(url = %self.endpoints.token_url, "exchanging assertion for access token");
        let response = self
            .http
            .post(&self.endpoints.token_url)
            .form(&request)
            .send()
            .await
            .map_err(|err| ClientError::Authentication {
                status: err.status().map(|status| status.as_u16()),
                body: err.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ClientError::Authentication {
                status: Some(status.as_u16()),
                body: err.to_string(),
            })?;
        if !status.is_success() {
            return Err(ClientError::Authentication {
                status: Some(status.as_u16()),
                body,
            });
        }

        let rejected = || ClientError::Authentication {
            status: Some(status.as_u16()),
            body: body.clone(),
        };
        let parsed: TokenResponse = serde_json::from_str(&body).map_err(|_| rejected())?;
        CachedToken::new(parsed.access_token, parsed.expires_in, Utc::now()).ok_or_else(rejected)
    }
}
