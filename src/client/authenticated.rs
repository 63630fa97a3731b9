//! Bearer-token decorator with retry on token expiry.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use tracing::warn;

use super::transport::{merge_headers, HttpRequest, HttpResponse, Transport};
use crate::auth::TokenManager;
use crate::error::TOKEN_EXPIRED_STATUS;
use crate::{Error, Result};

/// How many times a request is reissued after a token-expired response.
const MAX_TOKEN_RETRIES: u32 = 1;

/// Decorator that authenticates requests with the shared access token.
///
/// Each request carries `Authorization: Bearer <token>`, overriding any
/// caller-supplied value. A 403 response invalidates the token and the
/// identical request is sent once more with a fresh one; whatever comes back
/// then is returned as-is.
pub struct AuthenticatedTransport {
    inner: Arc<dyn Transport>,
    auth: Arc<TokenManager>,
}

impl AuthenticatedTransport {
    /// Wrap `inner`, taking tokens from `auth`.
    pub fn new(inner: Arc<dyn Transport>, auth: Arc<TokenManager>) -> Self {
        Self { inner, auth }
    }

    /// The token manager backing this transport.
    pub fn token_manager(&self) -> &Arc<TokenManager> {
        &self.auth
    }
}

fn with_bearer(request: &HttpRequest, token: &SecretString) -> Result<HttpRequest> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
        .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
    value.set_sensitive(true);

    let mut forced = HeaderMap::new();
    forced.insert(AUTHORIZATION, value);

    let mut authorized = request.clone();
    authorized.headers = merge_headers(&request.headers, &forced);
    Ok(authorized)
}

#[async_trait]
impl Transport for AuthenticatedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut retries = 0;
        loop {
            let token = self.auth.get_valid_token().await?;
            let response = self.inner.send(with_bearer(&request, &token)?).await?;

            if response.status.as_u16() != TOKEN_EXPIRED_STATUS || retries >= MAX_TOKEN_RETRIES {
                return Ok(response);
            }

            retries += 1;
            warn!(
                method = %request.method,
                url = %request.url,
                "Access token rejected; retrying with a fresh token"
            );
            self.auth.invalidate().await;
        }
    }
}

impl std::fmt::Debug for AuthenticatedTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedTransport")
            .field("auth", &self.auth)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderName;
    use reqwest::{Method, StatusCode};
    use std::sync::Mutex;

    /// Answers auth calls with fixed payloads and everything else with the
    /// next scripted status.
    struct FakeApi {
        statuses: Mutex<Vec<u16>>,
        bearers: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Transport for FakeApi {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
            let body = if request.url.ends_with("/auth/nonce") {
                r#"{"statusCode":200,"data":{"nonce":"n"}}"#
            } else if request.url.ends_with("/auth/access-token") {
                r#"{"statusCode":200,"data":{"accessToken":"tok"}}"#
            } else {
                let bearer = request.headers[AUTHORIZATION].to_str().unwrap().to_string();
                self.bearers.lock().unwrap().push(bearer);
                let status = self.statuses.lock().unwrap().remove(0);
                return Ok(HttpResponse::new(StatusCode::from_u16(status).unwrap(), "{}"));
            };
            Ok(HttpResponse::new(StatusCode::OK, body))
        }
    }

    #[tokio::test]
    async fn test_second_403_is_returned_as_is() {
        let api = Arc::new(FakeApi {
            statuses: Mutex::new(vec![403, 403]),
            bearers: Mutex::new(Vec::new()),
        });
        let auth = Arc::new(TokenManager::new("https://api.example.test", api.clone()));
        let transport = AuthenticatedTransport::new(api.clone(), auth);

        let response = transport
            .send(HttpRequest::new(Method::GET, "https://api.example.test/collections"))
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::FORBIDDEN);
        assert_eq!(*api.bearers.lock().unwrap(), vec!["Bearer tok", "Bearer tok"]);
        // the refreshed token stays cached after the final rejection
        assert!(transport.token_manager().peek_token().await.is_some());
    }

    #[test]
    fn test_with_bearer_overrides_caller_authorization() {
        let request = HttpRequest::new(Method::GET, "https://example.test/")
            .with_header(AUTHORIZATION, HeaderValue::from_static("Basic abc"))
            .with_header(HeaderName::from_static("x-trace"), HeaderValue::from_static("1"));
        let token = SecretString::from("tok".to_string());

        let authorized = with_bearer(&request, &token).unwrap();

        assert_eq!(authorized.headers.get(AUTHORIZATION).unwrap(), "Bearer tok");
        assert!(authorized.headers.get(AUTHORIZATION).unwrap().is_sensitive());
        assert_eq!(authorized.headers.get("x-trace").unwrap(), "1");
        assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "Basic abc");
    }
}
