//! Core domain types and port definitions for commander.
//!
//! This crate holds the `Command` entity, the repository port, and an
//! in-memory repository implementation used as a test double by adapters.
//! It contains no HTTP or storage details.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{Command, MAX_HOW_TO_LEN, MAX_PLATFORM_LEN, NewCommand};
pub use ports::{CommandRepository, InMemoryCommandRepository, RepositoryError};
