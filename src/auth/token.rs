//! Access-token lifecycle for the ForTem developer API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use secrecy::SecretString;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::debug;

use crate::client::{parse_response, HttpRequest, Transport, DEVELOPERS_API_PATH};
use crate::models::{AccessTokenData, AccessTokenResponse, FortemResponse, NonceResponse};
use crate::{Error, Result};

/// Lifetime of an access token once issued.
pub const TOKEN_TTL: Duration = Duration::from_secs(5 * 60);

/// A token is treated as expired this long before it actually expires.
pub const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(30);

/// An access token together with the instant it expires.
#[derive(Clone)]
pub struct CachedToken {
    access_token: SecretString,
    expires_at: Instant,
}

impl CachedToken {
    fn issued_now(access_token: SecretString) -> Self {
        Self {
            access_token,
            expires_at: Instant::now() + TOKEN_TTL,
        }
    }

    /// Returns `true` if the token may still be presented at `now`,
    /// honoring [`TOKEN_EXPIRY_MARGIN`].
    pub fn is_usable_at(&self, now: Instant) -> bool {
        now + TOKEN_EXPIRY_MARGIN < self.expires_at
    }

    /// When the token expires.
    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }
}

/// Manages the nonce/access-token exchange and caches the resulting token.
///
/// The manager is shared by every service of a [`FortemClient`](crate::FortemClient),
/// so all of them present the same token and observe the same invalidations.
///
/// # Example
///
/// ```no_run
/// use secrecy::ExposeSecret;
///
/// # async fn example(client: fortem_rs::FortemClient) -> fortem_rs::Result<()> {
/// let token = client.auth().get_valid_token().await?;
/// println!("token length: {}", token.expose_secret().len());
/// # Ok(())
/// # }
/// ```
pub struct TokenManager {
    api_base_url: String,
    transport: Arc<dyn Transport>,
    cached: RwLock<Option<CachedToken>>,
    refresh: Mutex<()>,
}

impl TokenManager {
    /// Create a manager that authenticates against `api_base_url` through
    /// `transport`.
    ///
    /// `transport` must add the API key itself; see
    /// [`ApiKeyTransport`](crate::client::ApiKeyTransport).
    pub fn new(api_base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            transport,
            cached: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.api_base_url, DEVELOPERS_API_PATH, path)
    }

    /// Step 1: request an authentication nonce.
    ///
    /// Does not touch the cached token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if the API key is rejected and
    /// [`Error::Api`] for any other failure status.
    pub async fn request_nonce(&self) -> Result<NonceResponse> {
        let request = HttpRequest::new(Method::POST, self.url("/auth/nonce"));
        let response = self.transport.send(request).await?;
        let envelope: FortemResponse<NonceResponse> = parse_response(response)?;
        Ok(envelope.data)
    }

    /// Step 2: exchange a nonce for an access token and cache it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] without sending anything if `nonce`
    /// is empty.
    pub async fn exchange_nonce_for_token(&self, nonce: &str) -> Result<AccessTokenResponse> {
        if nonce.is_empty() {
            return Err(Error::Authentication("nonce is required".to_string()));
        }

        let request = HttpRequest::new(Method::POST, self.url("/auth/access-token"))
            .with_json(&serde_json::json!({ "nonce": nonce }))?;
        let response = self.transport.send(request).await?;
        let envelope: FortemResponse<AccessTokenData> = parse_response(response)?;

        let access_token = SecretString::from(envelope.data.access_token);
        *self.cached.write().await = Some(CachedToken::issued_now(access_token.clone()));
        debug!(ttl_secs = TOKEN_TTL.as_secs(), "Cached new access token");

        Ok(AccessTokenResponse { access_token })
    }

    /// Return the cached token if it is still usable.
    ///
    /// This read evicts the cache as a side effect: a token inside the
    /// expiry margin is cleared and `None` is returned.
    pub async fn peek_token(&self) -> Option<SecretString> {
        let now = Instant::now();
        {
            let cached = self.cached.read().await;
            match cached.as_ref() {
                None => return None,
                Some(token) if token.is_usable_at(now) => return Some(token.access_token.clone()),
                Some(_) => {}
            }
        }

        let mut cached = self.cached.write().await;
        // another task may have stored a fresh token between the two locks
        match cached.as_ref() {
            Some(token) if token.is_usable_at(now) => Some(token.access_token.clone()),
            Some(_) => {
                debug!("Evicting access token inside expiry margin");
                *cached = None;
                None
            }
            None => None,
        }
    }

    /// Return a usable token, running the nonce exchange if needed.
    ///
    /// Performs no I/O while a usable token is cached and exactly two
    /// requests (nonce, then token) otherwise. Concurrent callers that all
    /// find the cache empty share a single exchange.
    pub async fn get_valid_token(&self) -> Result<SecretString> {
        if let Some(token) = self.peek_token().await {
            return Ok(token);
        }

        let _guard = self.refresh.lock().await;
        if let Some(token) = self.peek_token().await {
            return Ok(token);
        }

        debug!("Refreshing access token");
        let NonceResponse { nonce } = self.request_nonce().await?;
        let AccessTokenResponse { access_token } = self.exchange_nonce_for_token(&nonce).await?;
        Ok(access_token)
    }

    /// Clear the cached token.
    pub async fn invalidate(&self) {
        if self.cached.write().await.take().is_some() {
            debug!("Invalidated cached access token");
        }
    }
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("api_base_url", &self.api_base_url)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for CachedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedToken")
            .field("access_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
