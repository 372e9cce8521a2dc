//! Core error types.

use thiserror::Error;

/// Errors returned by a chat-completion exchange.
///
/// The first three variants are domain errors produced by this crate's own
/// checks. The rest are opaque passthroughs from request construction, the
/// network, or JSON handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// The requested model is not in the supported allow-list.
    #[error("Unsupported or invalid model: {0}")]
    InvalidModel(String),

    /// The response parsed but carried zero choices.
    #[error("No choices returned from the API")]
    NoChoicesReturned,

    /// Choices were present but none held a usable assistant message.
    #[error("No assistant message found in the API response")]
    NoAssistantMessage,

    /// Network-layer failure (DNS, TLS, connect, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Request serialization or response deserialization failed.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// A request could not be built from the supplied configuration.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Error kind for presentation (coarse-grained)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidModel,
    NoChoicesReturned,
    NoAssistantMessage,
    TransportFailure,
}

impl LlmError {
    /// Classify this error into one of the contract's error kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidModel(_) => ErrorKind::InvalidModel,
            Self::NoChoicesReturned => ErrorKind::NoChoicesReturned,
            Self::NoAssistantMessage => ErrorKind::NoAssistantMessage,
            Self::HttpError(_) | Self::JsonError(_) | Self::ConfigurationError(_) => {
                ErrorKind::TransportFailure
            }
        }
    }

    /// Whether this error was raised by the crate's own checks rather than
    /// passed through from the transport or JSON layer.
    pub fn is_domain_error(&self) -> bool {
        !matches!(self.kind(), ErrorKind::TransportFailure)
    }
}
