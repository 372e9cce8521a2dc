//! Blocking facade.
//!
//! Drives [`crate::call_openai`] on a private current-thread runtime for
//! callers without one. Calling these functions from inside an async runtime
//! panics, as with any nested `block_on`.

use crate::config::Config;
use crate::error::LlmError;
use crate::transport::HttpTransport;

fn runtime() -> Result<tokio::runtime::Runtime, LlmError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| LlmError::ConfigurationError(format!("Failed to start runtime: {e}")))
}

/// Blocking version of [`crate::call_openai`].
pub fn call_openai(
    config: &Config,
    transport: Option<&dyn HttpTransport>,
) -> Result<String, LlmError> {
    runtime()?.block_on(crate::client::call_openai(config, transport))
}
