//! HTTP transport abstraction.
//!
//! The chat-completion call depends only on "POST JSON with headers, get back
//! a status and a body". [`HttpTransport`] is that capability; callers inject
//! their own implementation to change timeouts, proxies, or to substitute a
//! test double. [`ReqwestTransport`] is the default over `reqwest`.

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::config::HttpConfig;
use crate::defaults;
use crate::error::LlmError;

/// Transport-level request data for JSON POST requests.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Custom HTTP transport for JSON requests.
///
/// Implementations must return the body for every status code. Only
/// failures to complete the exchange are errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, LlmError>;
}

/// Build an HTTP client from `HttpConfig`
///
/// # Errors
/// Returns `ConfigurationError` for an invalid proxy URL or default header,
/// and `HttpError` if the client itself cannot be built.
pub fn build_http_client_from_config(config: &HttpConfig) -> Result<reqwest::Client, LlmError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| LlmError::ConfigurationError(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }

    if !config.headers.is_empty() {
        let mut headers = HeaderMap::new();
        for (k, v) in &config.headers {
            let name = reqwest::header::HeaderName::from_bytes(k.as_bytes()).map_err(|e| {
                LlmError::ConfigurationError(format!("Invalid header name '{k}': {e}"))
            })?;
            let value = reqwest::header::HeaderValue::from_str(v).map_err(|e| {
                LlmError::ConfigurationError(format!("Invalid header value for '{k}': {e}"))
            })?;
            headers.insert(name, value);
        }
        builder = builder.default_headers(headers);
    }

    builder
        .build()
        .map_err(|e| LlmError::HttpError(format!("Failed to create HTTP client: {e}")))
}

/// Default transport backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl ReqwestTransport {
    /// Wrap an existing client. Its timeout, proxy and TLS settings are used
    /// unmodified.
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: None,
        }
    }

    /// Build a transport from `HttpConfig`.
    pub fn from_config(config: &HttpConfig) -> Result<Self, LlmError> {
        Ok(Self::new(build_http_client_from_config(config)?))
    }

    /// Send requests addressed to the `OpenAI` API to `base_url` instead.
    ///
    /// `base_url` replaces the `https://api.openai.com/v1` prefix, so
    /// `http://localhost:8080/v1` receives `POST /v1/chat/completions`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    fn resolve_url(&self, url: &str) -> String {
        match (&self.base_url, url.strip_prefix(defaults::endpoint::OPENAI_BASE_URL)) {
            (Some(base), Some(rest)) => format!("{base}{rest}"),
            _ => url.to_string(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, LlmError> {
        let url = self.resolve_url(&request.url);
        let body = serde_json::to_vec(&request.body)?;

        let response = self
            .client
            .post(&url)
            .headers(request.headers)
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(HttpTransportResponse {
            status,
            headers,
            body,
        })
    }
}

/// The transport used when the caller supplies none: a fresh client with the
/// default 10-second timeout.
pub fn default_transport() -> Result<ReqwestTransport, LlmError> {
    ReqwestTransport::from_config(&HttpConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_build_http_client_default() {
        let config = HttpConfig::default();
        let result = build_http_client_from_config(&config);
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_http_client_with_timeouts() {
        let config = HttpConfig {
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        };

        assert!(build_http_client_from_config(&config).is_ok());
    }

    #[test]
    fn test_build_http_client_with_invalid_header_name() {
        let mut config = HttpConfig::default();
        config
            .headers
            .insert("Invalid Header Name".to_string(), "value".to_string());

        let result = build_http_client_from_config(&config);
        assert!(matches!(result, Err(LlmError::ConfigurationError(_))));
    }

    #[test]
    fn test_build_http_client_with_invalid_proxy() {
        let config = HttpConfig {
            proxy: Some("not a url".to_string()),
            ..Default::default()
        };

        let result = build_http_client_from_config(&config);
        assert!(matches!(result, Err(LlmError::ConfigurationError(_))));
    }

    #[test]
    fn base_url_rewrites_only_openai_urls() {
        let transport =
            ReqwestTransport::new(reqwest::Client::new()).with_base_url("http://127.0.0.1:9000/");

        assert_eq!(
            transport.resolve_url(defaults::endpoint::CHAT_COMPLETIONS_URL),
            "http://127.0.0.1:9000/chat/completions"
        );
        assert_eq!(
            transport.resolve_url("https://example.com/v1/chat/completions"),
            "https://example.com/v1/chat/completions"
        );
    }

    #[test]
    fn without_base_url_urls_pass_through() {
        let transport = ReqwestTransport::new(reqwest::Client::new());
        assert_eq!(
            transport.resolve_url(defaults::endpoint::CHAT_COMPLETIONS_URL),
            defaults::endpoint::CHAT_COMPLETIONS_URL
        );
    }
}
