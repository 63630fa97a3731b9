//! HTTP client and transport layers for the ForTem API.
//!
//! This module provides the main entry point [`FortemClient`] and the layers
//! each request passes through:
//!
//! 1. [`AuthenticatedTransport`] adds the bearer token and retries once when
//!    the API reports the token as expired.
//! 2. [`ApiKeyTransport`] adds the developer API key and the default content
//!    type.
//! 3. A base [`Transport`], [`ReqwestTransport`] unless one was injected.
//!
//! Responses are turned into typed envelopes by [`parse_response`].
//!
//! # Example
//!
//! ```no_run
//! use fortem_rs::{FortemClient, Network};
//!
//! # async fn example() -> fortem_rs::Result<()> {
//! let client = FortemClient::new("developer_api_key", Network::Mainnet)?;
//! let collections = client.collections().list().await?;
//! # Ok(())
//! # }
//! ```

mod authenticated;
mod config;
mod http;
mod response;
mod transport;

pub use authenticated::AuthenticatedTransport;
pub use config::ClientConfig;
pub use http::{FortemClient, FortemClientBuilder, API_KEY_ENV, DEVELOPERS_API_PATH, NETWORK_ENV};
pub use response::parse_response;
pub use transport::{
    ApiKeyTransport, FormPart, HttpRequest, HttpResponse, ReqwestTransport, RequestBody, Transport,
    API_KEY_HEADER,
};
pub(crate) use http::ClientInner;
