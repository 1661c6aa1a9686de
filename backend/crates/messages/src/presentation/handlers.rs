//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;

use crate::application::create_message::CreateMessageUseCase;
use crate::application::list_messages::ListMessagesUseCase;
use crate::domain::repository::MessageRepository;
use crate::error::{MessageError, MessageResult};
use crate::presentation::dto::{CreateMessageRequest, CreateMessageResponse, ListMessagesResponse};

/// Shared state for message handlers
#[derive(Clone)]
pub struct MessagesAppState<R>
where
    R: MessageRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /api/db/messages
pub async fn list_messages<R>(
    State(state): State<MessagesAppState<R>>,
) -> MessageResult<Json<ListMessagesResponse>>
where
    R: MessageRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListMessagesUseCase::new(state.repo.clone());
    let messages = use_case.execute().await?;

    Ok(Json(ListMessagesResponse::from(messages)))
}

/// POST /api/db/messages
///
/// The body is parsed by hand so a malformed payload produces the flat
/// error object instead of axum's rejection format.
pub async fn create_message<R>(
    State(state): State<MessagesAppState<R>>,
    body: Bytes,
) -> MessageResult<(StatusCode, Json<CreateMessageResponse>)>
where
    R: MessageRepository + Clone + Send + Sync + 'static,
{
    let request: CreateMessageRequest =
        serde_json::from_slice(&body).map_err(|_| MessageError::InvalidPayload)?;

    let use_case = CreateMessageUseCase::new(state.repo.clone());
    let message = use_case.execute(request.content).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateMessageResponse::from(message)),
    ))
}
