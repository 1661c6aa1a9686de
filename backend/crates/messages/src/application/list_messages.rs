//! List Messages Use Case

use std::sync::Arc;

use crate::domain::entities::Message;
use crate::domain::repository::MessageRepository;
use crate::error::MessageResult;

/// List Messages Use Case
pub struct ListMessagesUseCase<R>
where
    R: MessageRepository,
{
    repo: Arc<R>,
}

impl<R> ListMessagesUseCase<R>
where
    R: MessageRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch the most recent messages, newest first.
    pub async fn execute(&self) -> MessageResult<Vec<Message>> {
        let messages = self.repo.list_recent().await?;

        tracing::debug!(count = messages.len(), "Messages listed");

        Ok(messages)
    }
}
