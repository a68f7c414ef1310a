//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the storage adapters behind the trivia services.

pub mod storage;
