//! Response envelope and authentication payloads.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Common envelope wrapping every successful API response.
///
/// The `data` payload is forwarded as returned by the API; no validation is
/// performed beyond deserialization into `T`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortemResponse<T> {
    /// Status code echoed in the response body
    pub status_code: u16,
    /// Response payload
    pub data: T,
}

impl<T> FortemResponse<T> {
    /// Consume the envelope and return its payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Nonce issued by the authentication endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonceResponse {
    /// Single-use nonce to exchange for an access token
    pub nonce: String,
}

/// Access token obtained by exchanging a nonce.
#[derive(Debug, Clone)]
pub struct AccessTokenResponse {
    /// Bearer token for authenticated endpoints
    pub access_token: SecretString,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccessTokenData {
    pub(crate) access_token: String,
}
