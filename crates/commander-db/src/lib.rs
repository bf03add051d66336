//! SQLite repository implementation for commander.
//!
//! Adapts the `CommandRepository` port from `commander-core` to a SQLite
//! database via sqlx. Entry points call [`setup_database`] with the resolved
//! database path and hand the pool to [`SqliteCommandRepository`].

#![deny(unsafe_code)]

pub mod repositories;
pub mod setup;

// Re-export repository implementation
pub use repositories::SqliteCommandRepository;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
