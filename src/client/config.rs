//! Client configuration options.

use std::time::Duration;

use crate::Network;

/// Configuration for the ForTem client.
///
/// # Example
///
/// ```
/// use fortem_rs::{ClientConfig, Network};
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_network(Network::Testnet)
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Network to talk to
    pub network: Network,
    /// Request timeout applied by the default transport
    pub timeout: Duration,
    /// User-Agent header value sent by the default transport
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            timeout: Duration::from_secs(30),
            user_agent: format!("fortem-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the network.
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
