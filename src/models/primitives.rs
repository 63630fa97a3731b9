//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around identifiers so that a
//! wallet address cannot be passed where a redeem code is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A strongly-typed collection ID.
///
/// # Example
///
/// ```
/// use fortem_rs::CollectionId;
///
/// let id = CollectionId::new(42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(u64);

impl CollectionId {
    /// Create a new collection ID.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric ID.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CollectionId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A wallet address identifying a ForTem user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Create a new wallet address.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the wallet address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for WalletAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for WalletAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WalletAddress {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A redeem code attached to a minted item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedeemCode(String);

impl RedeemCode {
    /// Create a new redeem code.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the redeem code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RedeemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RedeemCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for RedeemCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RedeemCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Base URLs for one ForTem network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Base URL for REST API requests.
    pub api_base_url: &'static str,
    /// Base URL of the user-facing ForTem web service.
    pub service_url: &'static str,
}

const MAINNET: NetworkConfig = NetworkConfig {
    api_base_url: "https://api.fortem.gg",
    service_url: "https://fortem.gg",
};

const TESTNET: NetworkConfig = NetworkConfig {
    api_base_url: "https://testnet-api.fortem.gg",
    service_url: "https://testnet.fortem.gg",
};

/// ForTem network environment.
///
/// Determines which API endpoints to use.
///
/// # Example
///
/// ```
/// use fortem_rs::Network;
///
/// let network = Network::Testnet;
/// assert_eq!(network.api_base_url(), "https://testnet-api.fortem.gg");
/// assert_eq!(Network::default(), Network::Mainnet);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// Production network.
    #[default]
    Mainnet,
    /// Test network.
    Testnet,
}

impl Network {
    /// Get the full URL table for this network.
    pub fn config(&self) -> NetworkConfig {
        match self {
            Network::Mainnet => MAINNET,
            Network::Testnet => TESTNET,
        }
    }

    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        self.config().api_base_url
    }

    /// Get the base URL of the ForTem web service.
    pub fn service_url(&self) -> &'static str {
        self.config().service_url
    }

    /// Returns `true` if this is the main network.
    pub fn is_mainnet(&self) -> bool {
        matches!(self, Network::Mainnet)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(Error::Config(format!(
                "unknown network '{}', expected 'mainnet' or 'testnet'",
                other
            ))),
        }
    }
}
