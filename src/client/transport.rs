//! Request/response types and the pluggable transport layer.
//!
//! Every request the client makes is an owned [`HttpRequest`] handed to a
//! [`Transport`]. The default [`ReqwestTransport`] sends it over the network;
//! tests and alternate stacks can supply their own implementation through
//! [`FortemClientBuilder::transport`](crate::FortemClientBuilder::transport).

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Serialize;

use super::config::ClientConfig;
use crate::{Error, Result};

/// Header carrying the developer API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// One part of a `multipart/form-data` body.
#[derive(Debug, Clone)]
pub struct FormPart {
    /// Form field name
    pub name: String,
    /// File name reported for the part
    pub file_name: Option<String>,
    /// MIME type of the part
    pub content_type: Option<String>,
    /// Part contents
    pub bytes: Bytes,
}

/// Body of an outgoing request.
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// Pre-serialized JSON
    Json(Bytes),
    /// `multipart/form-data`; the transport chooses the boundary
    Multipart(Vec<FormPart>),
}

impl RequestBody {
    /// Returns `true` for multipart bodies.
    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }
}

/// An outgoing HTTP request.
///
/// Requests are cheap to clone so that the same request can be reissued
/// after a token refresh.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: RequestBody,
}

impl HttpRequest {
    /// Create a request with no headers and no body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
        }
    }

    /// Serialize `body` as the JSON request body.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = RequestBody::Json(Bytes::from(serde_json::to_vec(body)?));
        Ok(self)
    }

    /// Use a multipart body.
    pub fn with_multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    /// Set a header, replacing any previous value.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// A buffered HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Response status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Bytes,
}

impl HttpResponse {
    /// Create a response with no headers.
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Sends requests and buffers their responses.
///
/// Implementations must not retry on their own: connection failures are
/// surfaced to the caller unchanged.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and return the buffered response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        (**self).send(request).await
    }
}

/// Merge `overrides` over `base` into a new header map.
///
/// Every header name present in `overrides` replaces all values of that name
/// in `base`; other headers of `base` are kept. Neither input is modified.
pub(crate) fn merge_headers(base: &HeaderMap, overrides: &HeaderMap) -> HeaderMap {
    let mut merged = base.clone();
    for name in overrides.keys() {
        merged.remove(name);
    }
    for (name, value) in overrides {
        merged.append(name.clone(), value.clone());
    }
    merged
}

/// [`Transport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport honoring the timeout and user agent of `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { http })
    }

    /// Wrap an existing reqwest client.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let builder = self
            .http
            .request(request.method, &request.url)
            .headers(request.headers);

        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(bytes) => builder.body(bytes),
            RequestBody::Multipart(parts) => builder.multipart(build_form(parts)?),
        };

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn build_form(parts: Vec<FormPart>) -> Result<reqwest::multipart::Form> {
    let mut form = reqwest::multipart::Form::new();
    for part in parts {
        let mut field = reqwest::multipart::Part::bytes(part.bytes.to_vec());
        if let Some(file_name) = part.file_name {
            field = field.file_name(file_name);
        }
        if let Some(content_type) = part.content_type {
            field = field.mime_str(&content_type)?;
        }
        form = form.part(part.name, field);
    }
    Ok(form)
}

/// Decorator that adds the developer API key to every request.
///
/// Also defaults `Content-Type` to `application/json` when the caller set
/// none, except for multipart bodies whose boundary the base transport writes.
pub struct ApiKeyTransport {
    inner: Arc<dyn Transport>,
    api_key: HeaderValue,
}

impl ApiKeyTransport {
    /// Wrap `inner`, sending `api_key` with every request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the key is not a valid header value.
    pub fn new(inner: Arc<dyn Transport>, api_key: &str) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(api_key)
            .map_err(|_| Error::InvalidInput("API key contains invalid characters".to_string()))?;
        api_key.set_sensitive(true);
        Ok(Self { inner, api_key })
    }
}

#[async_trait]
impl Transport for ApiKeyTransport {
    async fn send(&self, mut request: HttpRequest) -> Result<HttpResponse> {
        let mut forced = HeaderMap::new();
        forced.insert(HeaderName::from_static(API_KEY_HEADER), self.api_key.clone());

        let mut headers = merge_headers(&request.headers, &forced);
        if !headers.contains_key(CONTENT_TYPE) && !request.body.is_multipart() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        request.headers = headers;

        self.inner.send(request).await
    }
}

impl std::fmt::Debug for ApiKeyTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyTransport")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<HttpRequest>>,
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
            self.seen.lock().unwrap().push(request);
            Ok(HttpResponse::new(StatusCode::OK, "{}"))
        }
    }

    fn wrap(recorder: &Arc<Recorder>) -> ApiKeyTransport {
        ApiKeyTransport::new(recorder.clone(), "developer_test_key").unwrap()
    }

    #[test]
    fn test_merge_headers_overrides_and_keeps() {
        let mut base = HeaderMap::new();
        base.insert("x-trace", HeaderValue::from_static("abc"));
        base.insert(AUTHORIZATION, HeaderValue::from_static("Bearer stale"));

        let mut overrides = HeaderMap::new();
        overrides.insert(AUTHORIZATION, HeaderValue::from_static("Bearer fresh"));

        let merged = merge_headers(&base, &overrides);
        assert_eq!(merged.get("x-trace").unwrap(), "abc");
        assert_eq!(merged.get_all(AUTHORIZATION).iter().count(), 1);
        assert_eq!(merged.get(AUTHORIZATION).unwrap(), "Bearer fresh");
        // inputs untouched
        assert_eq!(base.get(AUTHORIZATION).unwrap(), "Bearer stale");
    }

    #[tokio::test]
    async fn test_api_key_and_default_content_type() {
        let recorder = Arc::new(Recorder::default());
        let transport = wrap(&recorder);

        transport
            .send(HttpRequest::new(Method::POST, "https://example.test/nonce"))
            .await
            .unwrap();

        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen[0].headers.get(API_KEY_HEADER).unwrap(), "developer_test_key");
        assert_eq!(seen[0].headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[tokio::test]
    async fn test_caller_content_type_wins_but_api_key_is_forced() {
        let recorder = Arc::new(Recorder::default());
        let transport = wrap(&recorder);

        let request = HttpRequest::new(Method::POST, "https://example.test/")
            .with_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
            .with_header(HeaderName::from_static(API_KEY_HEADER), HeaderValue::from_static("spoofed"));
        transport.send(request).await.unwrap();

        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen[0].headers.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(seen[0].headers.get(API_KEY_HEADER).unwrap(), "developer_test_key");
    }

    #[tokio::test]
    async fn test_multipart_gets_no_json_content_type() {
        let recorder = Arc::new(Recorder::default());
        let transport = wrap(&recorder);

        let request = HttpRequest::new(Method::PUT, "https://example.test/upload").with_multipart(vec![FormPart {
            name: "file".to_string(),
            file_name: Some("a.png".to_string()),
            content_type: Some("image/png".to_string()),
            bytes: Bytes::from_static(b"data"),
        }]);
        transport.send(request).await.unwrap();

        let seen = recorder.seen.lock().unwrap();
        assert!(seen[0].headers.get(CONTENT_TYPE).is_none());
        assert!(seen[0].headers.get(API_KEY_HEADER).is_some());
    }

    #[test]
    fn test_invalid_api_key_rejected() {
        let recorder: Arc<dyn Transport> = Arc::new(Recorder::default());
        assert!(matches!(
            ApiKeyTransport::new(recorder, "bad\nkey"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let recorder = Arc::new(Recorder::default());
        let debug_str = format!("{:?}", wrap(&recorder));
        assert!(!debug_str.contains("developer_test_key"));
        assert!(debug_str.contains("REDACTED"));
    }
}
