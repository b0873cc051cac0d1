//! HTTP transport for the Messaging API.
//!
//! Handles bearer authentication, request timeout, body serialization and
//! the classification of failed exchanges into `LbError` variants.

use std::str::FromStr;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use linebot_core::config::{ApiConfig, AppConfig};
use linebot_core::constants;
use linebot_core::error::{ErrorResponse, LbError, LbResult};

/// Query type for requests that carry no query string.
pub type NoQuery = [(&'static str, &'static str)];

/// Everything outside the RFC 3986 unreserved set is escaped.
const ID_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode a caller-supplied id as exactly one path segment.
///
/// `/`, `?`, `#` and `%` come out escaped, so an id can never change the
/// endpoint or add a query string. Empty ids and the dot segments are
/// rejected because they would collapse into the parent path.
pub fn path_segment(id: &str) -> LbResult<String> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(LbError::InvalidId(id.to_string()));
    }
    Ok(utf8_percent_encode(id, ID_ENCODE_SET).to_string())
}

/// Image encodings accepted by the upload endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// MIME type sent as the request content type.
    pub fn content_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => constants::CONTENT_TYPE_JPEG,
            ImageFormat::Png => constants::CONTENT_TYPE_PNG,
        }
    }
}

impl FromStr for ImageFormat {
    type Err = LbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            "png" => Ok(ImageFormat::Png),
            _ => Err(LbError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Authenticated client for the Messaging API.
///
/// Holds a base address, a request timeout and the bearer credential, all
/// fixed at construction. Clones share the underlying connection pool, so a
/// single client can serve any number of concurrent calls.
#[derive(Clone)]
pub struct ApiClient {
    inner: Client,
    /// Base address without a trailing slash (e.g. "https://api.line.me").
    base_url: String,
    /// `Bearer <token>`, marked sensitive so it never shows up in debug output.
    auth_header: HeaderValue,
    timeout: Duration,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new ApiClient from API configuration.
    ///
    /// Fails with `LbError::Config` when the channel access token is empty,
    /// the base address is not a URL, or the timeout is zero.
    pub fn new(config: &ApiConfig) -> LbResult<Self> {
        let token = config.channel_access_token.trim();
        if token.is_empty() {
            return Err(LbError::Config("channel access token must not be empty".into()));
        }

        let mut auth_header = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            LbError::Config("channel access token contains invalid characters".into())
        })?;
        auth_header.set_sensitive(true);

        let base_url = AppConfig::sanitize_base_url(&config.base_url);
        Url::parse(&base_url)
            .map_err(|e| LbError::Config(format!("invalid base url '{}': {e}", config.base_url)))?;

        if config.timeout_ms == 0 {
            return Err(LbError::Config("request timeout must be greater than zero".into()));
        }
        let timeout = Duration::from_millis(config.timeout_ms);

        let inner = Client::builder()
            .timeout(timeout)
            .user_agent(constants::user_agent())
            .build()
            .map_err(|e| LbError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            base_url,
            auth_header,
            timeout,
        })
    }

    /// Create a client for the default endpoint and timeout.
    pub fn with_token(token: impl Into<String>) -> LbResult<Self> {
        Self::new(&ApiConfig::with_token(token))
    }

    /// Get the base address.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> LbResult<Url> {
        let full = if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        };
        Url::parse(&full).map_err(|e| LbError::Http(format!("invalid request url '{full}': {e}")))
    }

    /// Internal: start an authenticated request with an optional query string.
    fn build_request<Q>(&self, method: Method, path: &str, query: Option<&Q>) -> LbResult<RequestBuilder>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let mut builder = self
            .inner
            .request(method, url)
            .header(AUTHORIZATION, self.auth_header.clone());
        if let Some(q) = query {
            builder = builder.query(q);
        }
        Ok(builder)
    }

    /// Internal: attach a JSON body.
    fn with_json<B>(builder: RequestBuilder, body: &B) -> LbResult<RequestBuilder>
    where
        B: Serialize + ?Sized,
    {
        let bytes = serde_json::to_vec(body)?;
        Ok(builder.header(CONTENT_TYPE, constants::CONTENT_TYPE_JSON).body(bytes))
    }

    /// Send a request and classify the outcome.
    async fn execute(&self, method: &Method, path: &str, builder: RequestBuilder) -> LbResult<Response> {
        debug!("{} {}", method, path);

        let response = builder
            .send()
            .await
            .map_err(|e| Self::classify_error(path, e))?;

        Self::check_status(path, response).await
    }

    /// Turn a non-success response into `Api` or `Status`.
    ///
    /// The body is tried as a structured error first; only if that fails does
    /// the error fall back to the status code and reason phrase.
    async fn check_status(path: &str, response: Response) -> LbResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // A stalled error body is still a timeout; other read failures
        // leave nothing to parse and fall through to the status error.
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => return Err(Self::classify_error(path, e)),
            Err(_) => Default::default(),
        };
        match ErrorResponse::parse(&body) {
            Some(error) => {
                warn!("{} failed with status {}: {}", path, status.as_u16(), error);
                Err(LbError::Api {
                    path: path.to_string(),
                    error,
                })
            }
            None => {
                warn!("{} failed with status {}", path, status);
                Err(LbError::Status {
                    path: path.to_string(),
                    status: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
                })
            }
        }
    }

    /// Classify a reqwest error into an LbError variant.
    fn classify_error(path: &str, e: reqwest::Error) -> LbError {
        if e.is_timeout() {
            warn!("{} timed out", path);
            LbError::Timeout {
                path: path.to_string(),
            }
        } else if e.is_connect() {
            LbError::Http(format!("connection failed: {e}"))
        } else {
            LbError::Http(e.to_string())
        }
    }

    /// Read a successful response body and deserialize it.
    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> LbResult<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Self::classify_error(path, e))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| LbError::Serialization(format!("failed to parse response from {path}: {e}")))
    }

    // --- Public HTTP methods ---

    /// GET a JSON resource, with an optional query mapping.
    ///
    /// The query is any serde value that encodes as a flat string-keyed
    /// mapping, e.g. `BTreeMap<&str, u32>` or a struct of scalar fields.
    pub async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> LbResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.build_request(Method::GET, path, query)?;
        let response = self.execute(&Method::GET, path, builder).await?;
        Self::decode(path, response).await
    }

    /// Convenience: GET a JSON resource without a query string.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> LbResult<T> {
        self.get::<T, NoQuery>(path, None).await
    }

    /// GET a resource as raw bytes.
    pub async fn get_bytes(&self, path: &str) -> LbResult<Vec<u8>> {
        let builder = self.build_request::<NoQuery>(Method::GET, path, None)?;
        let response = self.execute(&Method::GET, path, builder).await?;
        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| Self::classify_error(path, e))
    }

    /// POST a JSON body and deserialize the JSON response.
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> LbResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = Self::with_json(self.build_request::<NoQuery>(Method::POST, path, None)?, body)?;
        let response = self.execute(&Method::POST, path, builder).await?;
        Self::decode(path, response).await
    }

    /// POST an optional JSON body, discarding the response body.
    ///
    /// The call is still awaited and a failed status is still reported.
    pub async fn post<B>(&self, path: &str, body: Option<&B>) -> LbResult<()>
    where
        B: Serialize + ?Sized,
    {
        let mut builder = self.build_request::<NoQuery>(Method::POST, path, None)?;
        if let Some(b) = body {
            builder = Self::with_json(builder, b)?;
        }
        self.execute(&Method::POST, path, builder).await?;
        Ok(())
    }

    /// Convenience: POST without a body.
    pub async fn post_empty(&self, path: &str) -> LbResult<()> {
        self.post::<()>(path, None).await
    }

    /// POST raw image bytes. `format` must name jpeg (or jpg) or png.
    ///
    /// An unsupported format fails before any request is sent.
    pub async fn post_image(&self, path: &str, bytes: Vec<u8>, format: &str) -> LbResult<()> {
        let format = ImageFormat::from_str(format)?;
        self.post_image_as(path, bytes, format).await
    }

    /// POST raw JPEG bytes.
    pub async fn post_jpeg(&self, path: &str, bytes: Vec<u8>) -> LbResult<()> {
        self.post_image_as(path, bytes, ImageFormat::Jpeg).await
    }

    /// POST raw PNG bytes.
    pub async fn post_png(&self, path: &str, bytes: Vec<u8>) -> LbResult<()> {
        self.post_image_as(path, bytes, ImageFormat::Png).await
    }

    async fn post_image_as(&self, path: &str, bytes: Vec<u8>, format: ImageFormat) -> LbResult<()> {
        let builder = self
            .build_request::<NoQuery>(Method::POST, path, None)?
            .header(CONTENT_TYPE, format.content_type())
            .body(bytes);
        self.execute(&Method::POST, path, builder).await?;
        Ok(())
    }

    /// DELETE a resource, discarding the response body.
    pub async fn delete(&self, path: &str) -> LbResult<()> {
        let builder = self.build_request::<NoQuery>(Method::DELETE, path, None)?;
        self.execute(&Method::DELETE, path, builder).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn test_config() -> ApiConfig {
        ApiConfig {
            base_url: "http://127.0.0.1:9".into(),
            channel_access_token: "test-token".into(),
            timeout_ms: 10_000,
        }
    }

    #[test]
    fn test_empty_token_rejected() {
        for token in ["", "   "] {
            let mut config = test_config();
            config.channel_access_token = token.into();
            let err = ApiClient::new(&config).unwrap_err();
            assert!(matches!(err, LbError::Config(_)), "token {token:?} gave {err}");
        }
    }

    #[test]
    fn test_token_with_newline_rejected() {
        let mut config = test_config();
        config.channel_access_token = "abc\ndef".into();
        assert!(matches!(ApiClient::new(&config), Err(LbError::Config(_))));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut config = test_config();
        config.base_url = "not a url".into();
        assert!(matches!(ApiClient::new(&config), Err(LbError::Config(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = test_config();
        config.timeout_ms = 0;
        assert!(matches!(ApiClient::new(&config), Err(LbError::Config(_))));
    }

    #[test]
    fn test_defaults() {
        let client = ApiClient::with_token("abc").unwrap();
        assert_eq!(client.base_url(), "https://api.line.me");
        assert_eq!(client.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_debug_hides_token() {
        let client = ApiClient::new(&test_config()).unwrap();
        let out = format!("{client:?}");
        assert!(!out.contains("test-token"));
    }

    #[test]
    fn test_url_joins_path() {
        let mut config = test_config();
        config.base_url = "https://example.com/api/".into();
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(
            client.url("/v2/bot/info").unwrap().as_str(),
            "https://example.com/api/v2/bot/info"
        );
        assert_eq!(
            client.url("v2/bot/info").unwrap().as_str(),
            "https://example.com/api/v2/bot/info"
        );
    }

    #[test]
    fn test_request_carries_bearer_token() {
        let client = ApiClient::new(&test_config()).unwrap();
        let request = client
            .build_request::<NoQuery>(Method::GET, "/v2/bot/info", None)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer test-token");
        assert!(request.url().query().is_none());
    }

    #[test]
    fn test_query_mapping_encoded() {
        let client = ApiClient::new(&test_config()).unwrap();
        let mut query = BTreeMap::new();
        query.insert("limit", 10);
        let request = client
            .build_request(Method::GET, "/v2/bot/followers/ids", Some(&query))
            .unwrap()
            .build()
            .unwrap();
        assert!(request.url().query().unwrap().contains("limit=10"));
    }

    #[test]
    fn test_json_body_content_type() {
        let client = ApiClient::new(&test_config()).unwrap();
        let builder = client
            .build_request::<NoQuery>(Method::POST, "/v2/bot/message/push", None)
            .unwrap();
        let request = ApiClient::with_json(builder, &serde_json::json!({ "to": "U1" }))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            request.headers()[CONTENT_TYPE],
            "application/json; charset=utf-8"
        );
        assert_eq!(
            request.body().and_then(|b| b.as_bytes()).unwrap(),
            br#"{"to":"U1"}"#
        );
    }

    #[test]
    fn test_image_format_parsing() {
        assert_eq!("jpeg".parse::<ImageFormat>().unwrap(), ImageFormat::Jpeg);
        assert_eq!("JPG".parse::<ImageFormat>().unwrap(), ImageFormat::Jpeg);
        assert_eq!("png".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::Png.content_type(), "image/png");

        let err = "gif".parse::<ImageFormat>().unwrap_err();
        assert!(matches!(err, LbError::UnsupportedFormat(ref f) if f == "gif"));
        assert!(err.to_string().contains("gif"));
    }

    #[test]
    fn test_uppercase_scheme_base_url_accepted() {
        let mut config = test_config();
        config.base_url = "HTTPS://api.line.me/".into();
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(
            client.url("/v2/bot/info").unwrap().as_str(),
            "https://api.line.me/v2/bot/info"
        );
    }

    #[test]
    fn test_path_segment_escapes_separators() {
        assert_eq!(path_segment("U4af4980629").unwrap(), "U4af4980629");
        assert_eq!(path_segment("richmenu-88c0_x.y~z").unwrap(), "richmenu-88c0_x.y~z");
        assert_eq!(path_segment("../info").unwrap(), "..%2Finfo");
        assert_eq!(path_segment("U1?x=1").unwrap(), "U1%3Fx%3D1");
        assert_eq!(path_segment("a#b").unwrap(), "a%23b");
        assert_eq!(path_segment("%2e%2e").unwrap(), "%252e%252e");
        assert_eq!(path_segment("a b").unwrap(), "a%20b");
    }

    #[test]
    fn test_path_segment_rejects_empty_and_dot_segments() {
        for id in ["", ".", ".."] {
            assert!(
                matches!(path_segment(id), Err(LbError::InvalidId(ref s)) if s == id),
                "id {id:?} was accepted"
            );
        }
    }

    #[test]
    fn test_encoded_id_stays_in_one_segment() {
        let client = ApiClient::new(&test_config()).unwrap();
        let path = format!("/v2/bot/profile/{}", path_segment("../info").unwrap());
        let url = client.url(&path).unwrap();
        assert_eq!(url.path(), "/v2/bot/profile/..%2Finfo");
        assert!(url.query().is_none());
    }

    #[tokio::test]
    async fn test_unsupported_format_fails_before_sending() {
        // Nothing listens on the discard port; reaching the network would
        // produce an Http error instead.
        let client = ApiClient::new(&test_config()).unwrap();
        let err = client
            .post_image("/v2/bot/richmenu/rm-1/content", vec![1, 2, 3], "gif")
            .await
            .unwrap_err();
        assert!(matches!(err, LbError::UnsupportedFormat(_)));
    }
}
