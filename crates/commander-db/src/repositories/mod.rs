//! Repository implementations backed by `SQLite`.

pub mod sqlite_command_repository;

pub use sqlite_command_repository::SqliteCommandRepository;
