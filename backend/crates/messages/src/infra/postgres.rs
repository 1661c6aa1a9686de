//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::MessageId;
use sqlx::PgPool;

use crate::domain::entities::Message;
use crate::domain::repository::{LIST_LIMIT, MessageRepository};
use crate::domain::value_objects::MessageContent;
use crate::error::{MessageError, MessageResult};

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: i64,
    content: String,
    created_at: DateTime<Utc>,
}

impl MessageRow {
    fn into_message(self) -> MessageResult<Message> {
        Ok(Message::new(
            MessageId::from_i64(self.id),
            MessageContent::new(self.content)?,
            self.created_at,
        ))
    }
}

impl MessageRepository for PgMessageRepository {
    async fn create(&self, content: &MessageContent) -> MessageResult<Message> {
        let (id, created_at) = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            r#"
            INSERT INTO messages (content)
            VALUES ($1)
            RETURNING id, created_at
            "#,
        )
        .bind(content.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(MessageError::InsertFailed)?;

        Ok(Message::new(
            MessageId::from_i64(id),
            content.clone(),
            created_at,
        ))
    }

    async fn list_recent(&self) -> MessageResult<Vec<Message>> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, content, created_at
            FROM messages
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(LIST_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(MessageError::QueryFailed)?;

        // Rows that fail domain validation are skipped, not fatal
        let messages = rows
            .into_iter()
            .filter_map(|row| match row.into_message() {
                Ok(message) => Some(message),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping invalid message row");
                    None
                }
            })
            .collect();

        Ok(messages)
    }
}
