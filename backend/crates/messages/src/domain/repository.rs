//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::Message;
use crate::domain::value_objects::MessageContent;
use crate::error::MessageResult;

/// How many rows a listing may return at most
pub const LIST_LIMIT: i64 = 100;

/// Message repository trait
#[trait_variant::make(MessageRepository: Send)]
pub trait LocalMessageRepository {
    /// Persist new content; the store assigns id and timestamp
    async fn create(&self, content: &MessageContent) -> MessageResult<Message>;

    /// Most recent messages, newest first, capped at [`LIST_LIMIT`]
    async fn list_recent(&self) -> MessageResult<Vec<Message>>;
}
