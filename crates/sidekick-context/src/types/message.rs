use serde::{Deserialize, Serialize};

use super::prompt::Prompt;
use crate::config::ContextConfig;
use crate::error::{ContextError, Result};

/// Conversational turn owner, as chat-completion APIs tag it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// Message body: plain text for system and assistant turns, a structured
/// [`Prompt`] for user turns.
#[derive(Debug, Clone)]
pub enum MessageContent {
    Text(String),
    Prompt(Prompt),
}

impl From<String> for MessageContent {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for MessageContent {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Prompt> for MessageContent {
    fn from(prompt: Prompt) -> Self {
        Self::Prompt(prompt)
    }
}

/// One turn of a conversation, before wire conversion.
///
/// User turns must hold a [`Prompt`]; the constructors make that the
/// only reachable shape, and [`Message::to_api`] rejects anything else.
#[derive(Debug, Clone)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

impl Message {
    /// Create system message
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Create user message from a structured prompt
    pub fn user(prompt: Prompt) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Prompt(prompt),
        }
    }

    /// Create assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Convert to the wire shape with default rendering configuration.
    pub fn to_api(&self) -> Result<ApiMessage> {
        self.to_api_with(&ContextConfig::default())
    }

    /// Convert to the flat role/content pair the API transport sends.
    ///
    /// Fails with [`ContextError::InvariantViolation`] when a user turn
    /// holds bare text instead of a [`Prompt`]; an unformatted string
    /// must never go out as a live user request.
    pub fn to_api_with(&self, config: &ContextConfig) -> Result<ApiMessage> {
        let content = match (self.role, &self.content) {
            (Role::User, MessageContent::Text(_)) => {
                return Err(ContextError::InvariantViolation(
                    "user message content must be a Prompt, not a bare string".to_string(),
                ));
            }
            (_, MessageContent::Prompt(prompt)) => prompt.render_with(config),
            (_, MessageContent::Text(text)) => text.clone(),
        };

        Ok(ApiMessage {
            role: self.role,
            content,
        })
    }
}

/// Fully rendered role/content pair, ready for a chat-completion request
/// body's `messages` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub role: Role,
    pub content: String,
}
