//! Unit tests for messages crate
//! Target: C0 coverage 100%, C1 coverage 80%

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use chrono::{TimeZone, Utc};
use kernel::id::MessageId;
use tower::ServiceExt;

use crate::domain::entities::Message;
use crate::domain::repository::MessageRepository;
use crate::domain::value_objects::MessageContent;
use crate::error::{MessageError, MessageResult};

/// In-memory repository. Assigns ids sequentially and keeps rows in
/// insertion order so `list_recent` can return them newest first.
#[derive(Clone, Default)]
struct InMemoryRepository {
    rows: Arc<Mutex<Vec<Message>>>,
}

impl MessageRepository for InMemoryRepository {
    async fn create(&self, content: &MessageContent) -> MessageResult<Message> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        let message = Message::new(
            MessageId::from_i64(id),
            content.clone(),
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + chrono::Duration::seconds(id),
        );
        rows.push(message.clone());
        Ok(message)
    }

    async fn list_recent(&self) -> MessageResult<Vec<Message>> {
        let rows = self.rows.lock().unwrap();
        let mut messages: Vec<Message> = rows.clone();
        messages.reverse();
        Ok(messages)
    }
}

/// Repository whose every operation fails
#[derive(Clone)]
struct BrokenRepository;

impl MessageRepository for BrokenRepository {
    async fn create(&self, _content: &MessageContent) -> MessageResult<Message> {
        Err(MessageError::InsertFailed(sqlx::Error::PoolClosed))
    }

    async fn list_recent(&self) -> MessageResult<Vec<Message>> {
        Err(MessageError::QueryFailed(sqlx::Error::PoolClosed))
    }
}

async fn get(app: &Router, path: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post(app: &Router, path: &str, body: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[cfg(test)]
mod value_object_tests {
    use crate::domain::value_objects::MessageContent;
    use crate::error::MessageError;

    #[test]
    fn test_content_accepts_non_empty() {
        let content = MessageContent::new("hello").unwrap();
        assert_eq!(content.as_str(), "hello");
    }

    #[test]
    fn test_content_rejects_empty() {
        let err = MessageContent::new("").unwrap_err();
        assert!(matches!(err, MessageError::EmptyContent));
    }

    #[test]
    fn test_content_keeps_whitespace_verbatim() {
        let content = MessageContent::new("  padded  ").unwrap();
        assert_eq!(content.as_str(), "  padded  ");
    }
}

#[cfg(test)]
mod handler_tests {
    use axum::http::StatusCode;

    use super::{BrokenRepository, InMemoryRepository, body_json, get, post};
    use crate::presentation::router::messages_router_generic;

    #[tokio::test]
    async fn test_list_empty() {
        let app = messages_router_generic(InMemoryRepository::default());

        let response = get(&app, "/db/messages").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["count"], 0);
        assert_eq!(body["messages"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_create_then_list_newest_first() {
        let app = messages_router_generic(InMemoryRepository::default());

        post(&app, "/db/messages", r#"{"content": "first"}"#).await;
        post(&app, "/db/messages", r#"{"content": "second"}"#).await;

        let response = get(&app, "/db/messages").await;
        let body = body_json(response).await;

        assert_eq!(body["count"], 2);
        assert_eq!(body["messages"][0]["content"], "second");
        assert_eq!(body["messages"][1]["content"], "first");
    }

    #[tokio::test]
    async fn test_create_returns_201_with_envelope() {
        let app = messages_router_generic(InMemoryRepository::default());

        let response = post(&app, "/db/messages", r#"{"content": "hello"}"#).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Message saved successfully");
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["content"], "hello");
        let created_at = body["data"]["created_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_json() {
        let app = messages_router_generic(InMemoryRepository::default());

        let response = post(&app, "/db/messages", "{not json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({
                "error": "Invalid JSON payload. Expected: {\"content\": \"your message\"}"
            })
        );
    }

    #[tokio::test]
    async fn test_create_rejects_missing_content() {
        let app = messages_router_generic(InMemoryRepository::default());

        // well-formed JSON without the field is a content error, not a parse error
        let response = post(&app, "/db/messages", "{}").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "Content field is required"}));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_content() {
        let app = messages_router_generic(InMemoryRepository::default());

        let response = post(&app, "/db/messages", r#"{"content": ""}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "Content field is required"}));
    }

    #[tokio::test]
    async fn test_list_failure_maps_to_500() {
        let app = messages_router_generic(BrokenRepository);

        let response = get(&app, "/db/messages").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "Database query failed"}));
    }

    #[tokio::test]
    async fn test_create_failure_maps_to_500() {
        let app = messages_router_generic(BrokenRepository);

        let response = post(&app, "/db/messages", r#"{"content": "hello"}"#).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "Failed to insert message"}));
    }
}

#[cfg(test)]
mod dto_tests {
    use chrono::{TimeZone, Utc};
    use kernel::id::MessageId;

    use crate::domain::entities::Message;
    use crate::domain::value_objects::MessageContent;
    use crate::presentation::dto::{CreateMessageRequest, MessageDto};

    #[test]
    fn test_message_dto_fields() {
        let message = Message::new(
            MessageId::from_i64(7),
            MessageContent::new("hello").unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap(),
        );

        let dto = MessageDto::from(message);
        assert_eq!(dto.id, 7);
        assert_eq!(dto.content, "hello");
        assert_eq!(dto.created_at, "2024-05-01T12:30:45Z");
    }

    #[test]
    fn test_create_request_content_defaults_to_empty() {
        let request: CreateMessageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.content, "");
    }
}
