//! Configuration types.
//!
//! [`Config`] is the per-call value describing one exchange. [`HttpConfig`]
//! describes how the default transport's `reqwest::Client` is built.

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::time::Duration;

use crate::models::GPT_3_5_TURBO;

/// Per-call configuration for a chat-completion exchange.
///
/// The API key is kept in a [`SecretString`] so `Debug` output redacts it.
#[derive(Debug, Clone)]
pub struct Config {
    api_key: SecretString,
    /// System-role message content.
    pub instruction: String,
    /// User-role message content.
    pub input: String,
    /// Sampling temperature sent as-is.
    pub temperature: f64,
    /// Requested model id. Checked against the allow-list on every call.
    pub model: String,
    /// Emit payload and raw-body debug events. Never changes the result.
    pub debug: bool,
}

impl Config {
    /// Create a configuration with empty messages and a temperature of `0.7`.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            instruction: String::new(),
            input: String::new(),
            temperature: 0.7,
            model: model.into(),
            debug: false,
        }
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// The raw API key. Only header construction should call this.
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(String::new(), GPT_3_5_TURBO)
    }
}

/// HTTP configuration for the default transport
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Option<Duration>,
    /// Connection timeout
    pub connect_timeout: Option<Duration>,
    /// Default headers added to every request
    pub headers: HashMap<String, String>,
    /// Proxy URL applied to all schemes
    pub proxy: Option<String>,
    /// User agent
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(crate::defaults::http::REQUEST_TIMEOUT),
            connect_timeout: None,
            headers: HashMap::new(),
            proxy: None,
            user_agent: Some(crate::defaults::http::USER_AGENT.to_string()),
        }
    }
}

impl HttpConfig {
    /// Returns a builder for constructing `HttpConfig`
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::new()
    }
}

/// Builder for `HttpConfig`
///
/// Unset fields fall back to [`HttpConfig::default`].
#[derive(Debug, Clone, Default)]
pub struct HttpConfigBuilder {
    timeout: Option<Option<Duration>>,
    connect_timeout: Option<Duration>,
    headers: HashMap<String, String>,
    proxy: Option<String>,
    user_agent: Option<String>,
}

impl HttpConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the request timeout. `None` disables it.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = Some(timeout);
        self
    }
    pub fn connect_timeout(mut self, connect_timeout: Option<Duration>) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
    pub fn user_agent<S: Into<String>>(mut self, user_agent: Option<S>) -> Self {
        self.user_agent = user_agent.map(|s| s.into());
        self
    }
    pub fn proxy<S: Into<String>>(mut self, proxy: Option<S>) -> Self {
        self.proxy = proxy.map(|s| s.into());
        self
    }
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Build the configuration
    pub fn build(self) -> HttpConfig {
        let defaults = HttpConfig::default();
        HttpConfig {
            timeout: self.timeout.unwrap_or(defaults.timeout),
            connect_timeout: self.connect_timeout,
            headers: self.headers,
            proxy: self.proxy,
            user_agent: self.user_agent.or(defaults.user_agent),
        }
    }
}
