//! Command repository trait definition.
//!
//! This port defines the interface for command persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Command, NewCommand};

/// Repository for command persistence operations.
///
/// Mutations are staged against the store and become durable at `commit`;
/// each request stages exactly one logical mutation before committing.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD-only: list, get, create, update, delete, commit
/// - Validation and DTO shaping belong to the adapter, not here
#[async_trait]
pub trait CommandRepository: Send + Sync {
    /// List all commands in the repository.
    ///
    /// Order is unspecified. An empty store yields an empty vec, not an
    /// error.
    async fn list(&self) -> Result<Vec<Command>, RepositoryError>;

    /// Get a command by its database ID.
    ///
    /// Returns `Ok(None)` if no command has that ID. Errors are reserved
    /// for store faults.
    async fn get_by_id(&self, id: i64) -> Result<Option<Command>, RepositoryError>;

    /// Stage a new command for persistence.
    ///
    /// The store assigns the ID; the returned command carries it.
    async fn create(&self, command: NewCommand) -> Result<Command, RepositoryError>;

    /// Stage a full-field replacement of an existing command, identified by
    /// its ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the command doesn't exist.
    async fn update(&self, command: &Command) -> Result<(), RepositoryError>;

    /// Stage removal of the command with the given ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the command doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// Durably flush staged changes.
    ///
    /// This is the transaction boundary: a store fault surfaces here (or on
    /// the staging call) and is never reported as success.
    async fn commit(&self) -> Result<(), RepositoryError>;
}
