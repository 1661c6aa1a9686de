//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains message creation and listing.

pub mod create_message;
pub mod list_messages;
