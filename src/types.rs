//! Wire types for the chat-completions exchange.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::defaults;
use crate::error::LlmError;

/// Message author tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One request message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub stop: Vec<String>,
}

impl ChatRequest {
    /// Build the two-message request for `config`: system instruction first,
    /// then user input.
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![
                ChatMessage::system(config.instruction.clone()),
                ChatMessage::user(config.input.clone()),
            ],
            temperature: config.temperature,
            max_tokens: defaults::request::MAX_TOKENS,
            stop: vec![defaults::request::STOP_SEQUENCE.to_string()],
        }
    }
}

/// Response body. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    choices: Option<Vec<Choice>>,
}

/// One candidate completion: a legacy flat `text`, a structured `message`,
/// or both.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Choice {
    /// The trimmed assistant content, else the trimmed legacy text. Empty
    /// results after trimming count as absent.
    pub fn usable_text(&self) -> Option<&str> {
        let from_message = self
            .message
            .as_ref()
            .filter(|m| m.role.as_deref() == Some("assistant"))
            .and_then(|m| m.content.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty());

        from_message.or_else(|| {
            self.text
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
        })
    }
}

impl ChatResponse {
    pub fn choices(&self) -> &[Choice] {
        self.choices.as_deref().unwrap_or_default()
    }

    /// Extract the first usable assistant text.
    ///
    /// Choices are scanned in order and the scan stops at the first hit.
    pub fn first_assistant_text(&self) -> Result<String, LlmError> {
        let choices = self.choices();
        if choices.is_empty() {
            return Err(LlmError::NoChoicesReturned);
        }

        choices
            .iter()
            .find_map(Choice::usable_text)
            .map(str::to_string)
            .ok_or(LlmError::NoAssistantMessage)
    }
}
