//! # chatcall
//!
//! A minimal client for the `OpenAI` chat-completions API: one request, one
//! answer.
//!
//! A call validates the model against a fixed allow-list, sends a system
//! instruction and a user input, and returns the first assistant-authored
//! text of the response. There is no streaming, no retry and no conversation
//! state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatcall::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), LlmError> {
//!     let config = Config::new("your-api-key", "gpt-3.5-turbo")
//!         .with_instruction("Translate the following English text to French.")
//!         .with_input("Hello, World!")
//!         .with_temperature(0.7);
//!
//!     let reply = call_openai(&config, None).await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```
//!
//! ## Custom transports
//!
//! Anything implementing [`transport::HttpTransport`] can carry the request:
//! a `reqwest` client with its own timeout or proxy
//! ([`transport::ReqwestTransport::new`]), or a test double.

pub mod blocking;
pub mod client;
pub mod config;
pub mod defaults;
pub mod error;
pub mod headers;
pub mod models;
pub mod telemetry;
pub mod transport;
pub mod types;

pub use client::{CompletionClient, call_openai};
pub use config::{Config, HttpConfig, HttpConfigBuilder};
pub use error::{ErrorKind, LlmError};
pub use models::{SUPPORTED_MODELS, validate_model};
pub use transport::{HttpTransport, HttpTransportRequest, HttpTransportResponse, ReqwestTransport};

/// Commonly used items.
pub mod prelude {
    pub use crate::client::{CompletionClient, call_openai};
    pub use crate::config::{Config, HttpConfig};
    pub use crate::error::{ErrorKind, LlmError};
    pub use crate::models::validate_model;
    pub use crate::transport::{
        HttpTransport, HttpTransportRequest, HttpTransportResponse, ReqwestTransport,
    };
}
