//! Command handlers - CRUD operations over the command store.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::dto::{CommandCreateDto, CommandReadDto, CommandUpdateDto};
use crate::error::HttpError;
use crate::patch::{PatchOp, apply_patch};
use crate::state::AppState;

fn not_found(id: i64) -> HttpError {
    HttpError::NotFound(format!("Command with ID {id}"))
}

/// List all commands.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CommandReadDto>>, HttpError> {
    let commands = state.repo.list().await?;
    Ok(Json(commands.iter().map(CommandReadDto::from).collect()))
}

/// Get a single command by ID.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CommandReadDto>, HttpError> {
    let command = state.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(CommandReadDto::from(&command)))
}

/// Create a new command.
///
/// Responds 201 with the persisted object (carrying its assigned ID) and a
/// Location header resolving to the get-by-id route.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CommandCreateDto>,
) -> Result<impl IntoResponse, HttpError> {
    req.validate()?;

    let created = state.repo.create(req.into_new_command()).await?;
    state.repo.commit().await?;

    tracing::debug!(id = created.id, "command created");

    let location = format!("/api/commands/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CommandReadDto::from(&created)),
    ))
}

/// Replace all mutable fields of an existing command (PUT semantics).
///
/// Full replacement, not merge: every field of the body overwrites the
/// stored one. The ID is untouched.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<CommandUpdateDto>,
) -> Result<StatusCode, HttpError> {
    let Some(mut command) = state.repo.get_by_id(id).await? else {
        return Err(not_found(id));
    };

    req.validate()?;
    req.apply_to(&mut command);

    state.repo.update(&command).await?;
    state.repo.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Apply an ordered sequence of patch operations to an existing command.
///
/// The entity is projected to its update-DTO shape, the operations apply to
/// that DTO, and the result is validated before anything is persisted. A
/// failing constraint aborts with 400 and leaves the stored entity
/// unmodified.
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(ops): Json<Vec<PatchOp>>,
) -> Result<StatusCode, HttpError> {
    let Some(mut command) = state.repo.get_by_id(id).await? else {
        return Err(not_found(id));
    };

    let mut dto = CommandUpdateDto::from(&command);
    apply_patch(&mut dto, &ops)?;
    dto.validate()?;
    dto.apply_to(&mut command);

    state.repo.update(&command).await?;
    state.repo.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a command.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    if state.repo.get_by_id(id).await?.is_none() {
        return Err(not_found(id));
    }

    state.repo.delete(id).await?;
    state.repo.commit().await?;

    tracing::debug!(id, "command deleted");

    Ok(StatusCode::NO_CONTENT)
}
