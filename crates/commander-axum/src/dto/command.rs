//! Command DTOs, projections, and field validation.
//!
//! Three projections of the `Command` entity, each with a distinct allowed
//! field set: read (output, includes `id`), create and update (input, never
//! carry `id`). Updates have full replacement semantics.

use serde::{Deserialize, Serialize};

use commander_core::{Command, MAX_HOW_TO_LEN, MAX_PLATFORM_LEN, NewCommand};

use crate::error::HttpError;

/// Output projection of a command: every field, including the assigned ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandReadDto {
    pub id: i64,
    pub how_to: String,
    pub platform: String,
    pub command_line: Option<String>,
}

impl From<&Command> for CommandReadDto {
    fn from(command: &Command) -> Self {
        Self {
            id: command.id,
            how_to: command.how_to.clone(),
            platform: command.platform.clone(),
            command_line: command.command_line.clone(),
        }
    }
}

/// Input shape for creating a command. The ID is never client-supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandCreateDto {
    pub how_to: String,
    pub platform: String,
    #[serde(default)]
    pub command_line: Option<String>,
}

impl CommandCreateDto {
    /// Project into the unpersisted entity shape; the store assigns the ID.
    pub fn into_new_command(self) -> NewCommand {
        NewCommand {
            how_to: self.how_to,
            platform: self.platform,
            command_line: self.command_line,
        }
    }

    /// Check field constraints, reporting the first violated one.
    pub fn validate(&self) -> Result<(), HttpError> {
        validate_fields(&self.how_to, &self.platform)
    }
}

/// Input shape for replacing a command's mutable fields (PUT semantics).
///
/// Also the shape patch operations are applied to before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandUpdateDto {
    pub how_to: String,
    pub platform: String,
    #[serde(default)]
    pub command_line: Option<String>,
}

impl From<&Command> for CommandUpdateDto {
    fn from(command: &Command) -> Self {
        Self {
            how_to: command.how_to.clone(),
            platform: command.platform.clone(),
            command_line: command.command_line.clone(),
        }
    }
}

impl CommandUpdateDto {
    /// Overwrite the entity's mutable fields in place. The ID is untouched.
    pub fn apply_to(&self, command: &mut Command) {
        command.how_to = self.how_to.clone();
        command.platform = self.platform.clone();
        command.command_line = self.command_line.clone();
    }

    /// Check field constraints, reporting the first violated one.
    pub fn validate(&self) -> Result<(), HttpError> {
        validate_fields(&self.how_to, &self.platform)
    }
}

/// Reusable validity check over the DTO field set.
///
/// `commandLine` is intentionally unconstrained.
fn validate_fields(how_to: &str, platform: &str) -> Result<(), HttpError> {
    if how_to.is_empty() {
        return Err(HttpError::Validation {
            field: "howTo",
            message: "howTo must not be empty".into(),
        });
    }
    if how_to.chars().count() > MAX_HOW_TO_LEN {
        return Err(HttpError::Validation {
            field: "howTo",
            message: format!("howTo must be at most {MAX_HOW_TO_LEN} characters"),
        });
    }
    if platform.is_empty() {
        return Err(HttpError::Validation {
            field: "platform",
            message: "platform must not be empty".into(),
        });
    }
    if platform.chars().count() > MAX_PLATFORM_LEN {
        return Err(HttpError::Validation {
            field: "platform",
            message: format!("platform must be at most {MAX_PLATFORM_LEN} characters"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_command() -> Command {
        Command {
            id: 3,
            how_to: "How to generate a migration".into(),
            platform: ".NET Core EF".into(),
            command_line: Some("dotnet ef migrations add".into()),
        }
    }

    #[test]
    fn read_dto_carries_every_field() {
        let dto = CommandReadDto::from(&sample_command());
        assert_eq!(dto.id, 3);
        assert_eq!(dto.how_to, "How to generate a migration");
        assert_eq!(dto.platform, ".NET Core EF");
        assert_eq!(dto.command_line.as_deref(), Some("dotnet ef migrations add"));
    }

    #[test]
    fn read_dto_serializes_camel_case() {
        let json = serde_json::to_value(CommandReadDto::from(&sample_command())).unwrap();
        assert!(json.get("howTo").is_some());
        assert!(json.get("commandLine").is_some());
        assert!(json.get("how_to").is_none());
    }

    #[test]
    fn create_dto_tolerates_missing_command_line() {
        let dto: CommandCreateDto =
            serde_json::from_str(r#"{"howTo":"List files","platform":"Ubuntu"}"#).unwrap();
        assert_eq!(dto.command_line, None);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn update_dto_applies_all_mutable_fields_and_keeps_id() {
        let mut command = sample_command();
        let dto = CommandUpdateDto {
            how_to: "Run a .NET Core App".into(),
            platform: ".NET Core".into(),
            command_line: None,
        };
        dto.apply_to(&mut command);
        assert_eq!(command.id, 3);
        assert_eq!(command.how_to, "Run a .NET Core App");
        assert_eq!(command.platform, ".NET Core");
        assert_eq!(command.command_line, None);
    }

    #[test]
    fn update_dto_round_trips_through_entity() {
        let command = sample_command();
        let dto = CommandUpdateDto::from(&command);
        let mut copy = command.clone();
        dto.apply_to(&mut copy);
        assert_eq!(copy, command);
    }

    #[test]
    fn empty_how_to_fails_validation() {
        let dto = CommandUpdateDto {
            how_to: String::new(),
            platform: "Ubuntu".into(),
            command_line: None,
        };
        let err = dto.validate().unwrap_err();
        assert!(matches!(err, HttpError::Validation { field: "howTo", .. }));
    }

    #[test]
    fn over_long_platform_fails_validation() {
        let dto = CommandUpdateDto {
            how_to: "x".into(),
            platform: "p".repeat(MAX_PLATFORM_LEN + 1),
            command_line: None,
        };
        let err = dto.validate().unwrap_err();
        assert!(matches!(
            err,
            HttpError::Validation {
                field: "platform",
                ..
            }
        ));
    }
}
