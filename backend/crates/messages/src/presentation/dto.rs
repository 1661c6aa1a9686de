//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Message;

/// Request for POST /api/db/messages
///
/// `content` defaults to empty so a well-formed document without the
/// field fails content validation, not JSON parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMessageRequest {
    #[serde(default)]
    pub content: String,
}

/// One message on the wire
#[derive(Debug, Clone, Serialize)]
pub struct MessageDto {
    pub id: i64,
    pub content: String,
    pub created_at: String,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.into_i64(),
            content: message.content.into_string(),
            created_at: rfc3339(message.created_at),
        }
    }
}

/// Response for GET /api/db/messages
#[derive(Debug, Clone, Serialize)]
pub struct ListMessagesResponse {
    pub count: usize,
    pub messages: Vec<MessageDto>,
}

impl From<Vec<Message>> for ListMessagesResponse {
    fn from(messages: Vec<Message>) -> Self {
        let messages: Vec<MessageDto> = messages.into_iter().map(MessageDto::from).collect();
        Self {
            count: messages.len(),
            messages,
        }
    }
}

/// Response for POST /api/db/messages
#[derive(Debug, Clone, Serialize)]
pub struct CreateMessageResponse {
    pub message: &'static str,
    pub data: MessageDto,
}

impl From<Message> for CreateMessageResponse {
    fn from(message: Message) -> Self {
        Self {
            message: "Message saved successfully",
            data: MessageDto::from(message),
        }
    }
}

fn rfc3339(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
