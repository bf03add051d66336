//! Partial-update patch operations and their applier.
//!
//! A patch document is an ordered sequence of tagged operations, each naming
//! a verb, a field path, and (for replace/add) a value. Operations apply to
//! the update DTO, never to the entity; validation runs as a separate pass
//! afterwards. This keeps patch semantics independent of any serialization
//! library's patch implementation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dto::CommandUpdateDto;
use crate::error::HttpError;

/// One tagged patch instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOp {
    /// Set the field at `path` to `value`.
    Replace { path: String, value: Value },
    /// Alias of `replace` for this flat, fixed-member document.
    Add { path: String, value: Value },
    /// Clear the field at `path`. Clearing a required field leaves it empty,
    /// which the validation pass then rejects.
    Remove { path: String },
}

/// The patchable members of the update DTO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    HowTo,
    Platform,
    CommandLine,
}

fn resolve_path(path: &str) -> Result<Field, HttpError> {
    match path {
        "/howTo" => Ok(Field::HowTo),
        "/platform" => Ok(Field::Platform),
        "/commandLine" => Ok(Field::CommandLine),
        other => Err(HttpError::BadRequest(format!(
            "unknown patch path '{other}'"
        ))),
    }
}

/// Coerce a patch value for a required string member.
fn string_value(field: &str, value: &Value) -> Result<String, HttpError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(HttpError::BadRequest(format!(
            "patch value for '{field}' must be a string, got {other}"
        ))),
    }
}

/// Coerce a patch value for the optional `commandLine` member.
fn optional_string_value(value: &Value) -> Result<Option<String>, HttpError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(HttpError::BadRequest(format!(
            "patch value for 'commandLine' must be a string or null, got {other}"
        ))),
    }
}

/// Apply an ordered sequence of patch operations to the DTO.
///
/// Stops at the first malformed operation. An empty sequence is valid and
/// changes nothing.
pub fn apply_patch(dto: &mut CommandUpdateDto, ops: &[PatchOp]) -> Result<(), HttpError> {
    for op in ops {
        match op {
            PatchOp::Replace { path, value } | PatchOp::Add { path, value } => {
                match resolve_path(path)? {
                    Field::HowTo => dto.how_to = string_value("howTo", value)?,
                    Field::Platform => dto.platform = string_value("platform", value)?,
                    Field::CommandLine => dto.command_line = optional_string_value(value)?,
                }
            }
            PatchOp::Remove { path } => match resolve_path(path)? {
                Field::HowTo => dto.how_to.clear(),
                Field::Platform => dto.platform.clear(),
                Field::CommandLine => dto.command_line = None,
            },
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_dto() -> CommandUpdateDto {
        CommandUpdateDto {
            how_to: "How to generate a migration".into(),
            platform: ".NET Core EF".into(),
            command_line: Some("dotnet ef migrations add".into()),
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut dto = base_dto();
        apply_patch(&mut dto, &[]).unwrap();
        assert_eq!(dto, base_dto());
    }

    #[test]
    fn replace_how_to_changes_only_how_to() {
        let mut dto = base_dto();
        let ops: Vec<PatchOp> = serde_json::from_value(json!([
            {"op": "replace", "path": "/howTo", "value": "Run a .NET Core App"}
        ]))
        .unwrap();
        apply_patch(&mut dto, &ops).unwrap();
        assert_eq!(dto.how_to, "Run a .NET Core App");
        assert_eq!(dto.platform, base_dto().platform);
        assert_eq!(dto.command_line, base_dto().command_line);
    }

    #[test]
    fn operations_apply_in_order() {
        let mut dto = base_dto();
        let ops: Vec<PatchOp> = serde_json::from_value(json!([
            {"op": "replace", "path": "/platform", "value": "first"},
            {"op": "replace", "path": "/platform", "value": "second"}
        ]))
        .unwrap();
        apply_patch(&mut dto, &ops).unwrap();
        assert_eq!(dto.platform, "second");
    }

    #[test]
    fn add_aliases_replace() {
        let mut dto = base_dto();
        let ops: Vec<PatchOp> = serde_json::from_value(json!([
            {"op": "add", "path": "/commandLine", "value": "dotnet run"}
        ]))
        .unwrap();
        apply_patch(&mut dto, &ops).unwrap();
        assert_eq!(dto.command_line.as_deref(), Some("dotnet run"));
    }

    #[test]
    fn remove_clears_command_line() {
        let mut dto = base_dto();
        let ops: Vec<PatchOp> =
            serde_json::from_value(json!([{"op": "remove", "path": "/commandLine"}])).unwrap();
        apply_patch(&mut dto, &ops).unwrap();
        assert_eq!(dto.command_line, None);
    }

    #[test]
    fn remove_on_required_field_leaves_it_empty_for_validation() {
        let mut dto = base_dto();
        let ops: Vec<PatchOp> =
            serde_json::from_value(json!([{"op": "remove", "path": "/howTo"}])).unwrap();
        apply_patch(&mut dto, &ops).unwrap();
        assert!(dto.how_to.is_empty());
        assert!(dto.validate().is_err());
    }

    #[test]
    fn null_clears_command_line_via_replace() {
        let mut dto = base_dto();
        let ops: Vec<PatchOp> = serde_json::from_value(json!([
            {"op": "replace", "path": "/commandLine", "value": null}
        ]))
        .unwrap();
        apply_patch(&mut dto, &ops).unwrap();
        assert_eq!(dto.command_line, None);
    }

    #[test]
    fn unknown_path_is_rejected() {
        let mut dto = base_dto();
        let ops: Vec<PatchOp> = serde_json::from_value(json!([
            {"op": "replace", "path": "/id", "value": "9"}
        ]))
        .unwrap();
        let err = apply_patch(&mut dto, &ops).unwrap_err();
        assert!(matches!(err, HttpError::BadRequest(_)));
    }

    #[test]
    fn unknown_verb_fails_deserialization() {
        let parsed: Result<Vec<PatchOp>, _> = serde_json::from_value(json!([
            {"op": "move", "path": "/howTo", "value": "x"}
        ]));
        assert!(parsed.is_err());
    }

    #[test]
    fn non_string_value_for_required_field_is_rejected() {
        let mut dto = base_dto();
        let ops: Vec<PatchOp> = serde_json::from_value(json!([
            {"op": "replace", "path": "/howTo", "value": 42}
        ]))
        .unwrap();
        let err = apply_patch(&mut dto, &ops).unwrap_err();
        assert!(matches!(err, HttpError::BadRequest(_)));
    }
}
