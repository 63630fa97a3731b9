//! Client facade for the ForTem API.

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::api::{CollectionsService, ItemsService, UsersService};
use crate::auth::TokenManager;
use crate::models::FortemResponse;
use crate::{Error, Network, Result};

use super::authenticated::AuthenticatedTransport;
use super::config::ClientConfig;
use super::response::parse_response;
use super::transport::{ApiKeyTransport, FormPart, HttpRequest, ReqwestTransport, Transport};

/// Path prefix shared by every developer endpoint.
pub const DEVELOPERS_API_PATH: &str = "/api/v1/developers";

/// Environment variable holding the API key for [`FortemClient::from_env`].
pub const API_KEY_ENV: &str = "FORTEM_API_KEY";

/// Environment variable selecting the network for [`FortemClient::from_env`].
pub const NETWORK_ENV: &str = "FORTEM_NETWORK";

/// The main client for interacting with the ForTem API.
///
/// The client owns one token cache shared by all of its services: a token
/// fetched for a user lookup is reused by the next collection call, and a
/// mint invalidates it for everyone. Cloning the client shares that state.
///
/// # Example
///
/// ```no_run
/// use fortem_rs::{FortemClient, Network, WalletAddress};
///
/// # async fn example() -> fortem_rs::Result<()> {
/// let client = FortemClient::new("developer_api_key", Network::Testnet)?;
///
/// let user = client.users().verify(&WalletAddress::new("0xabc123")).await?;
/// println!("registered: {}", user.data.is_user);
///
/// let collections = client.collections().list().await?;
/// println!("{} collections", collections.data.len());
/// # Ok(())
/// # }
/// ```
pub struct FortemClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: AuthenticatedTransport,
    pub(crate) auth: Arc<TokenManager>,
    pub(crate) config: ClientConfig,
}

impl FortemClient {
    /// Create a client for `network` using the default transport.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `api_key` is blank.
    pub fn new(api_key: impl Into<String>, network: Network) -> Result<Self> {
        Self::builder().api_key(api_key).network(network).build()
    }

    /// Start building a client.
    pub fn builder() -> FortemClientBuilder {
        FortemClientBuilder::default()
    }

    /// Create a client from `FORTEM_API_KEY` and the optional
    /// `FORTEM_NETWORK` (`mainnet` or `testnet`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the key is missing or blank, or the
    /// network is not recognized.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut builder = Self::builder();
        if let Some(api_key) = lookup(API_KEY_ENV) {
            builder = builder.api_key(api_key);
        }
        if let Some(network) = lookup(NETWORK_ENV) {
            builder = builder.network(network.parse()?);
        }
        builder.build()
    }

    /// Get the users service.
    pub fn users(&self) -> UsersService {
        UsersService::new(self.inner.clone())
    }

    /// Get the collections service.
    pub fn collections(&self) -> CollectionsService {
        CollectionsService::new(self.inner.clone())
    }

    /// Get the items service.
    pub fn items(&self) -> ItemsService {
        ItemsService::new(self.inner.clone())
    }

    /// Get the token manager shared by all services.
    pub fn auth(&self) -> &TokenManager {
        &self.inner.auth
    }

    /// Get the network this client talks to.
    pub fn network(&self) -> Network {
        self.inner.config.network
    }

    /// API base URL for the current network.
    pub fn api_base_url(&self) -> &'static str {
        self.inner.config.network.api_base_url()
    }

    /// Service URL for the current network.
    pub fn service_url(&self) -> &'static str {
        self.inner.config.network.service_url()
    }
}

/// Builder for [`FortemClient`].
///
/// # Example
///
/// ```
/// use fortem_rs::{FortemClient, Network};
///
/// let client = FortemClient::builder()
///     .api_key("developer_api_key")
///     .network(Network::Testnet)
///     .build()
///     .unwrap();
/// assert_eq!(client.api_base_url(), "https://testnet-api.fortem.gg");
/// ```
#[derive(Default)]
pub struct FortemClientBuilder {
    api_key: Option<String>,
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl FortemClientBuilder {
    /// Set the developer API key. Required.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the network. Defaults to [`Network::Mainnet`].
    pub fn network(mut self, network: Network) -> Self {
        self.config.network = network;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Send requests through `transport` instead of the default
    /// [`ReqwestTransport`].
    ///
    /// The API key, content type and bearer token are still added by the
    /// client before `transport` sees a request.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        let transport: Arc<dyn Transport> = Arc::new(transport);
        self.transport = Some(transport);
        self
    }

    /// Validate the inputs and wire the client together.
    ///
    /// No request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no API key was set or it is blank, and
    /// [`Error::InvalidInput`] if it cannot be sent as a header.
    pub fn build(self) -> Result<FortemClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| Error::Config("API key is required".to_string()))?;
        if api_key.trim().is_empty() {
            return Err(Error::Config("API key cannot be empty".to_string()));
        }

        let base: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&self.config)?),
        };
        let keyed: Arc<dyn Transport> = Arc::new(ApiKeyTransport::new(base, &api_key)?);

        let auth = Arc::new(TokenManager::new(
            self.config.network.api_base_url(),
            keyed.clone(),
        ));
        let http = AuthenticatedTransport::new(keyed, auth.clone());

        debug!(network = %self.config.network, "Created ForTem client");

        Ok(FortemClient {
            inner: Arc::new(ClientInner {
                http,
                auth,
                config: self.config,
            }),
        })
    }
}

impl std::fmt::Debug for FortemClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FortemClientBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("config", &self.config)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

impl ClientInner {
    fn url(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.config.network.api_base_url(),
            DEVELOPERS_API_PATH,
            path
        )
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<FortemResponse<T>> {
        self.execute(HttpRequest::new(Method::GET, self.url(path)))
            .await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<FortemResponse<T>> {
        self.execute(HttpRequest::new(Method::POST, self.url(path)).with_json(body)?)
            .await
    }

    /// Make a PUT request with a multipart body.
    pub(crate) async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        parts: Vec<FormPart>,
    ) -> Result<FortemResponse<T>> {
        self.execute(HttpRequest::new(Method::PUT, self.url(path)).with_multipart(parts))
            .await
    }

    async fn execute<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<FortemResponse<T>> {
        debug!(method = %request.method, url = %request.url, "Sending request");
        let response = self.http.send(request).await?;
        parse_response(response)
    }
}

impl Clone for FortemClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for FortemClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FortemClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_defaults_to_mainnet() {
        let client = FortemClient::from_lookup(lookup(&[(API_KEY_ENV, "key")])).unwrap();
        assert_eq!(client.network(), Network::Mainnet);
    }

    #[test]
    fn test_from_lookup_reads_network() {
        let client =
            FortemClient::from_lookup(lookup(&[(API_KEY_ENV, "key"), (NETWORK_ENV, "testnet")]))
                .unwrap();
        assert_eq!(client.api_base_url(), "https://testnet-api.fortem.gg");
    }

    #[test]
    fn test_from_lookup_missing_key() {
        let err = FortemClient::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: API key is required");
    }

    #[test]
    fn test_from_lookup_unknown_network() {
        let err = FortemClient::from_lookup(lookup(&[(API_KEY_ENV, "key"), (NETWORK_ENV, "devnet")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let builder = FortemClient::builder().api_key("developer_secret_key");
        let debug_str = format!("{:?}", builder);
        assert!(!debug_str.contains("developer_secret_key"));
    }
}
