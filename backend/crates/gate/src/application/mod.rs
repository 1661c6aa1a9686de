//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains delay injection and health reporting.

pub mod config;
pub mod delay;
pub mod report_health;
