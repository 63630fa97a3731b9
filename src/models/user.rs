//! User models.

use serde::{Deserialize, Serialize};

/// Result of looking up a wallet address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Whether the wallet belongs to a registered ForTem user
    pub is_user: bool,
    /// Display name
    #[serde(default)]
    pub nickname: String,
    /// Profile image URL
    #[serde(default)]
    pub profile_image: String,
    /// Wallet address that was looked up
    pub wallet_address: String,
}
