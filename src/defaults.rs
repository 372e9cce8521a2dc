//! Default Configuration Values
//!
//! Every fixed value of the chat-completion exchange lives here so the wire
//! contract can be read in one place.

use std::time::Duration;

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Default request timeout used when the caller supplies no transport.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("chatcall/", env!("CARGO_PKG_VERSION"));
}

/// Endpoint defaults
pub mod endpoint {
    macro_rules! base_url {
        () => {
            "https://api.openai.com/v1"
        };
    }

    /// Origin and version prefix of the `OpenAI` REST API.
    pub const OPENAI_BASE_URL: &str = base_url!();

    /// Full chat-completions URL every request is addressed to.
    pub const CHAT_COMPLETIONS_URL: &str = concat!(base_url!(), "/chat/completions");
}

/// Request body defaults
pub mod request {
    /// `max_tokens` sent with every request.
    pub const MAX_TOKENS: u32 = 100;

    /// The single stop sequence sent with every request: the two-character
    /// token backslash + `n`.
    pub const STOP_SEQUENCE: &str = "\\n";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_completions_url_extends_base_url() {
        assert_eq!(
            endpoint::CHAT_COMPLETIONS_URL,
            "https://api.openai.com/v1/chat/completions"
        );
        assert!(endpoint::CHAT_COMPLETIONS_URL.starts_with(endpoint::OPENAI_BASE_URL));
    }

    #[test]
    fn default_timeout_is_ten_seconds() {
        assert_eq!(http::REQUEST_TIMEOUT, Duration::from_secs(10));
    }
}
