//! Type Conversions for LlmError
//!
//! `From` implementations that let `?` turn transport and JSON failures into
//! opaque transport-kind errors.

use super::types::LlmError;

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[tokio::test]
    async fn test_from_reqwest_error() {
        // Bind then release a port so nothing is listening on it.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let reqwest_err = reqwest::Client::new()
            .post(format!("http://127.0.0.1:{port}/chat/completions"))
            .send()
            .await
            .unwrap_err();
        let llm_err: LlmError = reqwest_err.into();

        assert!(matches!(llm_err, LlmError::HttpError(_)));
        assert_eq!(llm_err.kind(), ErrorKind::TransportFailure);
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let llm_err: LlmError = json_err.into();
        assert!(matches!(llm_err, LlmError::JsonError(_)));
        assert_eq!(llm_err.kind(), ErrorKind::TransportFailure);
    }
}
