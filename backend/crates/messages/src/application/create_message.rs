//! Create Message Use Case

use std::sync::Arc;

use crate::domain::entities::Message;
use crate::domain::repository::MessageRepository;
use crate::domain::value_objects::MessageContent;
use crate::error::MessageResult;

/// Create Message Use Case
pub struct CreateMessageUseCase<R>
where
    R: MessageRepository,
{
    repo: Arc<R>,
}

impl<R> CreateMessageUseCase<R>
where
    R: MessageRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate the content and persist it, returning the stored row.
    pub async fn execute(&self, content: String) -> MessageResult<Message> {
        let content = MessageContent::new(content)?;
        let message = self.repo.create(&content).await?;

        tracing::info!(message_id = %message.id, "Message created");

        Ok(message)
    }
}
