//! Chat-completion client.
//!
//! One linear exchange per call: validate the model, build the payload, POST
//! it, parse the body and extract the first usable assistant text.

use std::sync::Arc;

use tracing::Instrument;

use crate::config::{Config, HttpConfig};
use crate::defaults;
use crate::error::LlmError;
use crate::headers::chat_headers;
use crate::models::validate_model;
use crate::transport::{
    HttpTransport, HttpTransportRequest, ReqwestTransport, default_transport,
};
use crate::types::{ChatRequest, ChatResponse};

/// Run one chat-completion exchange.
///
/// With `transport == None` a fresh [`ReqwestTransport`] with a 10-second
/// timeout is built for this call; a supplied transport is used as-is.
///
/// The HTTP status is never inspected: every body is parsed the same way.
///
/// # Errors
///
/// - [`LlmError::InvalidModel`] before any network activity
/// - [`LlmError::NoChoicesReturned`] / [`LlmError::NoAssistantMessage`] for
///   well-formed bodies without a usable answer
/// - transport-kind errors for header, network or JSON failures
pub async fn call_openai(
    config: &Config,
    transport: Option<&dyn HttpTransport>,
) -> Result<String, LlmError> {
    let span = tracing::info_span!("chat_completion", model = %config.model);

    async move {
        if !validate_model(&config.model) {
            tracing::warn!(model = %config.model, "rejecting unsupported model");
            return Err(LlmError::InvalidModel(config.model.clone()));
        }

        match transport {
            Some(transport) => exchange(config, transport).await,
            None => {
                let transport = default_transport()?;
                exchange(config, &transport).await
            }
        }
    }
    .instrument(span)
    .await
}

async fn exchange(config: &Config, transport: &dyn HttpTransport) -> Result<String, LlmError> {
    // serde_json writes non-finite floats as `null` instead of failing.
    if !config.temperature.is_finite() {
        return Err(LlmError::JsonError(format!(
            "temperature must be a finite number, got {}",
            config.temperature
        )));
    }

    let chat_request = ChatRequest::from_config(config);
    let body = serde_json::to_value(&chat_request)?;

    tracing::debug!(
        messages = chat_request.messages.len(),
        temperature = chat_request.temperature,
        "sending chat completion request"
    );
    if config.debug {
        tracing::debug!(payload = %body, "chat completion payload");
    }

    let request = HttpTransportRequest {
        url: defaults::endpoint::CHAT_COMPLETIONS_URL.to_string(),
        headers: chat_headers(config.api_key())?,
        body,
    };
    let response = transport.execute_json(request).await?;

    tracing::debug!(
        status = response.status,
        bytes = response.body.len(),
        "received chat completion response"
    );
    if config.debug {
        tracing::debug!(
            body = %String::from_utf8_lossy(&response.body),
            "chat completion raw response"
        );
    }

    let parsed: ChatResponse = serde_json::from_slice(&response.body)?;
    parsed.first_assistant_text()
}

/// A chat-completion client bound to one reusable transport.
///
/// Cloning is cheap and clones share the transport.
#[derive(Clone)]
pub struct CompletionClient {
    transport: Arc<dyn HttpTransport>,
}

impl CompletionClient {
    /// Client over the default transport (10-second timeout).
    pub fn new() -> Result<Self, LlmError> {
        Ok(Self::with_transport(Arc::new(default_transport()?)))
    }

    /// Client over a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Client over a `reqwest` transport built from `HttpConfig`.
    pub fn from_http_config(config: &HttpConfig) -> Result<Self, LlmError> {
        Ok(Self::with_transport(Arc::new(
            ReqwestTransport::from_config(config)?,
        )))
    }

    /// Run one exchange over this client's transport.
    pub async fn complete(&self, config: &Config) -> Result<String, LlmError> {
        call_openai(config, Some(self.transport.as_ref())).await
    }
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpTransportResponse;
    use async_trait::async_trait;
    use reqwest::header::HeaderMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_test::traced_test;

    struct CannedTransport {
        body: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl HttpTransport for CannedTransport {
        async fn execute_json(
            &self,
            _request: HttpTransportRequest,
        ) -> Result<HttpTransportResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpTransportResponse {
                status: 200,
                headers: HeaderMap::new(),
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    #[test]
    fn invalid_model_short_circuits() {
        let transport = CannedTransport {
            body: r#"{"choices":[{"text":"unused"}]}"#,
            calls: AtomicUsize::new(0),
        };
        let config = Config::new("key", "invalid-model");

        let result = tokio_test::block_on(call_openai(&config, Some(&transport)));

        assert_eq!(result, Err(LlmError::InvalidModel("invalid-model".into())));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn completion_client_reuses_transport() {
        let transport = Arc::new(CannedTransport {
            body: r#"{"choices":[{"message":{"role":"assistant","content":" ok "}}]}"#,
            calls: AtomicUsize::new(0),
        });
        let client = CompletionClient::with_transport(transport.clone());
        let config = Config::new("key", "gpt-4");

        for _ in 0..3 {
            let text = tokio_test::block_on(client.complete(&config)).unwrap();
            assert_eq!(text, "ok");
        }
        assert_eq!(transport.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn completion_client_from_http_config() {
        assert!(CompletionClient::from_http_config(&HttpConfig::default()).is_ok());

        let bad = HttpConfig::builder().header("bad name", "v").build();
        assert!(matches!(
            CompletionClient::from_http_config(&bad),
            Err(LlmError::ConfigurationError(_))
        ));
    }

    #[tokio::test]
    #[traced_test]
    async fn debug_flag_logs_payload_and_raw_body() {
        let transport = CannedTransport {
            body: r#"{"choices":[{"text":"Bonjour"}]}"#,
            calls: AtomicUsize::new(0),
        };
        let config = Config::new("key", "gpt-4")
            .with_input("Hello")
            .with_debug(true);

        let text = call_openai(&config, Some(&transport)).await.unwrap();

        assert_eq!(text, "Bonjour");
        assert!(logs_contain("chat completion payload"));
        assert!(logs_contain("chat completion raw response"));
        assert!(!logs_contain("Bearer"));
    }

    #[tokio::test]
    #[traced_test]
    async fn without_debug_flag_bodies_are_not_logged() {
        let transport = CannedTransport {
            body: r#"{"choices":[{"text":"Bonjour"}]}"#,
            calls: AtomicUsize::new(0),
        };
        let config = Config::new("key", "gpt-4").with_input("Hello");

        let text = call_openai(&config, Some(&transport)).await.unwrap();

        assert_eq!(text, "Bonjour");
        assert!(logs_contain("sending chat completion request"));
        assert!(!logs_contain("chat completion payload"));
        assert!(!logs_contain("chat completion raw response"));
    }
}
