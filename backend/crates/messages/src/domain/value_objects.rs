//! Domain Value Objects

use crate::error::MessageError;

/// Message content - guaranteed non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContent(String);

impl MessageContent {
    /// Validate and wrap raw content. Empty content is rejected; the
    /// original payload is otherwise stored verbatim, untrimmed.
    pub fn new(content: impl Into<String>) -> Result<Self, MessageError> {
        let content = content.into();
        if content.is_empty() {
            return Err(MessageError::EmptyContent);
        }
        Ok(Self(content))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for MessageContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
