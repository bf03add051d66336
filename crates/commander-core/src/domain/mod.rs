//! Domain types for commander.
//!
//! These types represent commands in the system, independent of any
//! infrastructure concerns (database, HTTP, etc.).

pub mod command;

pub use command::{Command, MAX_HOW_TO_LEN, MAX_PLATFORM_LEN, NewCommand};
