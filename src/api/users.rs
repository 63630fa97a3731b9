//! Users service.

use std::sync::Arc;

use super::encode_segment;
use crate::client::ClientInner;
use crate::models::{FortemResponse, User, WalletAddress};
use crate::Result;

/// Service for user lookups.
///
/// # Example
///
/// ```no_run
/// use fortem_rs::WalletAddress;
///
/// # async fn example(client: fortem_rs::FortemClient) -> fortem_rs::Result<()> {
/// let response = client.users().verify(&WalletAddress::new("0xabc123")).await?;
/// if response.data.is_user {
///     println!("Hello, {}!", response.data.nickname);
/// }
/// # Ok(())
/// # }
/// ```
pub struct UsersService {
    inner: Arc<ClientInner>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Check whether a wallet address belongs to a registered ForTem user.
    pub async fn verify(&self, wallet_address: &WalletAddress) -> Result<FortemResponse<User>> {
        self.inner
            .get(&format!("/users/{}", encode_segment(wallet_address.as_str())))
            .await
    }
}
