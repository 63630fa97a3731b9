//! Authentication for the ForTem developer API.
//!
//! ForTem uses a two-step challenge/response flow:
//!
//! 1. Request a nonce with the developer API key.
//! 2. Exchange the nonce for a short-lived access token (five minutes).
//!
//! [`TokenManager`] runs both steps, caches the resulting token and treats it
//! as expired thirty seconds early. Minting endpoints consume the token, so
//! the services invalidate it after every successful mint.
//!
//! ```no_run
//! # async fn example(client: fortem_rs::FortemClient) -> fortem_rs::Result<()> {
//! let auth = client.auth();
//!
//! // Manual flow
//! let nonce = auth.request_nonce().await?;
//! let token = auth.exchange_nonce_for_token(&nonce.nonce).await?;
//!
//! // Or let the manager decide
//! let token = auth.get_valid_token().await?;
//! # Ok(())
//! # }
//! ```

mod token;

pub use token::{CachedToken, TokenManager, TOKEN_EXPIRY_MARGIN, TOKEN_TTL};
