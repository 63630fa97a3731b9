//! # fortem-rs
//!
//! An async Rust client for the ForTem developer API.
//!
//! This crate wraps ForTem's REST endpoints for authentication, user lookup,
//! collection management, and item minting behind typed method calls.
//!
//! ## Features
//!
//! - **Authentication**: nonce/access-token exchange with a cached token,
//!   refreshed on demand thirty seconds before it expires
//! - **Transparent retry**: a request rejected with an expired token is
//!   reissued once with a fresh token
//! - **Collections and items**: list, create, mint, look up by redeem code,
//!   and upload images
//! - **Pluggable transport**: swap the reqwest-backed transport for your own
//!   implementation of [`client::Transport`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fortem_rs::{FortemClient, Network, WalletAddress};
//! use fortem_rs::models::CreateCollectionParams;
//!
//! #[tokio::main]
//! async fn main() -> fortem_rs::Result<()> {
//!     let client = FortemClient::new("developer_api_key", Network::Testnet)?;
//!
//!     // Tokens are fetched and cached automatically
//!     let user = client.users().verify(&WalletAddress::new("0xabc123")).await?;
//!     println!("registered: {}", user.data.is_user);
//!
//!     // Minting consumes the token; the next call fetches a new one
//!     let collection = client
//!         .collections()
//!         .create(&CreateCollectionParams::new("Genesis", "First drop"))
//!         .await?;
//!     println!("created {}", collection.data.name);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result};
pub use models::{CollectionId, FortemResponse, Network, NetworkConfig, RedeemCode, WalletAddress};
pub use client::{ClientConfig, FortemClient, FortemClientBuilder};
pub use auth::TokenManager;

/// Prelude module for convenient imports.
///
/// ```rust
/// use fortem_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        CollectionId, Network, NetworkConfig, RedeemCode, WalletAddress,
        // Envelope
        FortemResponse,
        // Resources
        Collection, CollectionLink, CreateCollectionParams, CreateItemParams, ImageUpload,
        ImageUploadResponse, Item, ItemAttribute, ItemOwner, ItemStatus, User,
    };
    pub use crate::client::{ClientConfig, FortemClient, FortemClientBuilder};
    pub use crate::auth::TokenManager;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_id_creation() {
        let id = CollectionId::new(42);
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_network_urls() {
        assert_eq!(Network::Mainnet.api_base_url(), "https://api.fortem.gg");
        assert_eq!(
            Network::Testnet.api_base_url(),
            "https://testnet-api.fortem.gg"
        );
    }
}
