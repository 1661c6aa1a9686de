//! Messages Router

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::domain::repository::MessageRepository;
use crate::infra::postgres::PgMessageRepository;
use crate::presentation::handlers::{self, MessagesAppState};

/// Create the messages router with PostgreSQL repository.
/// Meant to be nested under `/api` and shaped by the gate pipeline.
pub fn messages_router(repo: PgMessageRepository) -> Router {
    messages_router_generic(repo)
}

/// Create a generic messages router for any repository implementation
pub fn messages_router_generic<R>(repo: R) -> Router
where
    R: MessageRepository + Clone + Send + Sync + 'static,
{
    let state = MessagesAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/db/messages",
            get(handlers::list_messages::<R>).post(handlers::create_message::<R>),
        )
        .with_state(state)
}
