//! Infrastructure Layer - Database probe implementations

pub mod postgres;
