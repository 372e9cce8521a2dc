//! Error Handling Module
//!
//! This module provides the error type returned by every chat-completion call:
//! - Core error type (`LlmError`) and its coarse classification (`ErrorKind`)
//! - Type conversions from the transport and JSON error types
//!
//! # Example
//!
//! ```rust,ignore
//! use chatcall::error::{ErrorKind, LlmError};
//!
//! let error = LlmError::NoChoicesReturned;
//! assert_eq!(error.kind(), ErrorKind::NoChoicesReturned);
//! assert!(error.is_domain_error());
//! ```

// Module declarations
mod conversions;
pub mod types;

// Re-exports for public API
pub use types::*;
