//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused
//! - Absence of an entity on lookup is a value (`Ok(None)`), never an error

pub mod command_repository;
pub mod memory_command_repository;

use thiserror::Error;

pub use command_repository::CommandRepository;
pub use memory_command_repository::InMemoryCommandRepository;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx
/// errors) and provides a clean interface for handlers to act on storage
/// failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    ///
    /// Returned by mutations against a missing ID. Lookups report absence as
    /// `Ok(None)` instead.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),
}
