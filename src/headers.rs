//! HTTP Headers Utility

use crate::error::LlmError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

/// HTTP header builder for API requests
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    /// Create a new header builder
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Add Bearer token authorization
    pub fn with_bearer_auth(mut self, token: &str) -> Result<Self, LlmError> {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
            LlmError::ConfigurationError(format!("Invalid API key format: {e}"))
        })?;
        auth_value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, auth_value);
        Ok(self)
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self
    }

    /// Build the final HeaderMap
    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Headers for a chat-completions request: JSON content type plus bearer auth.
pub fn chat_headers(api_key: &str) -> Result<HeaderMap, LlmError> {
    Ok(HttpHeaderBuilder::new()
        .with_json_content_type()
        .with_bearer_auth(api_key)?
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_headers_carry_auth_and_content_type() {
        let headers = chat_headers("sk-test").unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer sk-test");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn api_key_with_newline_is_rejected() {
        let err = chat_headers("sk-test\nX-Injected: 1").unwrap_err();
        assert!(matches!(err, LlmError::ConfigurationError(_)));
    }
}
