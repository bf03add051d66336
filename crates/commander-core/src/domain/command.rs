//! Command domain types.
//!
//! A command records how to run something on some platform: a human-readable
//! description, the platform it applies to, and the command line itself.

use serde::{Deserialize, Serialize};

/// Maximum accepted length for `how_to`, enforced at the DTO boundary.
pub const MAX_HOW_TO_LEN: usize = 250;

/// Maximum accepted length for `platform`, enforced at the DTO boundary.
pub const MAX_PLATFORM_LEN: usize = 250;

/// A command that exists in the system with a database ID.
///
/// This represents a persisted command. Use `NewCommand` for commands that
/// haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Database ID (always present for persisted commands, never
    /// client-supplied).
    pub id: i64,
    /// What the command accomplishes.
    pub how_to: String,
    /// Platform the command applies to (e.g., "Ubuntu", ".NET Core EF").
    pub platform: String,
    /// The command line itself. Optional: a command may be described before
    /// its exact invocation is known.
    pub command_line: Option<String>,
}

/// A command to be inserted into the system (no ID yet).
///
/// After insertion, the repository returns a `Command` with the assigned ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCommand {
    /// What the command accomplishes.
    pub how_to: String,
    /// Platform the command applies to.
    pub platform: String,
    /// The command line itself, if known.
    pub command_line: Option<String>,
}

impl NewCommand {
    /// Attach an assigned ID, producing the persisted shape.
    ///
    /// Used by repository implementations once the store has chosen an ID.
    pub fn into_command(self, id: i64) -> Command {
        Command {
            id,
            how_to: self.how_to,
            platform: self.platform,
            command_line: self.command_line,
        }
    }
}
