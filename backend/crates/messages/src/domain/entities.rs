//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::MessageId;

use crate::domain::value_objects::MessageContent;

/// Message entity - a persisted client message
///
/// The id and timestamp are assigned by the database on insert, so a
/// `Message` only exists once a row does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub content: MessageContent,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(id: MessageId, content: MessageContent, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content,
            created_at,
        }
    }
}
