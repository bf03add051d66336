//! `SQLite` implementation of the `CommandRepository` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use commander_core::{Command, CommandRepository, NewCommand, RepositoryError};

const COMMAND_SELECT_COLUMNS: &str = "id, how_to, platform, command_line";

/// Map a database row to a `Command`.
fn row_to_command(row: &SqliteRow) -> Result<Command, RepositoryError> {
    Ok(Command {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        how_to: row
            .try_get("how_to")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        platform: row
            .try_get("platform")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        command_line: row
            .try_get("command_line")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
    })
}

/// `SQLite` implementation of the `CommandRepository` trait.
///
/// Holds a connection pool and implements all CRUD operations for commands.
/// Each staged mutation executes as its own implicit `SQLite` transaction;
/// `commit` is the durability checkpoint. Handlers stage exactly one
/// mutation per commit, so observable behavior matches the staged contract.
pub struct SqliteCommandRepository {
    pool: SqlitePool,
}

impl SqliteCommandRepository {
    /// Create a new `SQLite` command repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommandRepository for SqliteCommandRepository {
    async fn list(&self) -> Result<Vec<Command>, RepositoryError> {
        let query = format!("SELECT {COMMAND_SELECT_COLUMNS} FROM commands");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_command).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Command>, RepositoryError> {
        let query = format!("SELECT {COMMAND_SELECT_COLUMNS} FROM commands WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row.as_ref().map(row_to_command).transpose()
    }

    async fn create(&self, command: NewCommand) -> Result<Command, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO commands (how_to, platform, command_line) VALUES (?, ?, ?)",
        )
        .bind(&command.how_to)
        .bind(&command.platform)
        .bind(&command.command_line)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(command.into_command(result.last_insert_rowid()))
    }

    async fn update(&self, command: &Command) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE commands SET how_to = ?, platform = ?, command_line = ? WHERE id = ?",
        )
        .bind(&command.how_to)
        .bind(&command.platform)
        .bind(&command.command_line)
        .bind(command.id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Command with ID {}",
                command.id
            )));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM commands WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Command with ID {id}")));
        }
        Ok(())
    }

    async fn commit(&self) -> Result<(), RepositoryError> {
        // Statements above ran in their own implicit transactions; flush any
        // WAL frames so the mutation is durable before reporting success.
        sqlx::query("PRAGMA wal_checkpoint(PASSIVE)")
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    async fn test_repo() -> SqliteCommandRepository {
        let pool = setup_test_database().await.expect("in-memory db");
        SqliteCommandRepository::new(pool)
    }

    fn migration_command() -> NewCommand {
        NewCommand {
            how_to: "How to generate a migration".into(),
            platform: ".NET Core EF".into(),
            command_line: Some("dotnet ef migrations add".into()),
        }
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        let repo = test_repo().await;
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_assigns_id_and_round_trips() {
        let repo = test_repo().await;
        let created = repo.create(migration_command()).await.unwrap();
        repo.commit().await.unwrap();

        assert!(created.id > 0);
        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_by_id_returns_none_for_missing() {
        let repo = test_repo().await;
        assert!(repo.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn null_command_line_round_trips() {
        let repo = test_repo().await;
        let created = repo
            .create(NewCommand {
                how_to: "List files".into(),
                platform: "Ubuntu".into(),
                command_line: None,
            })
            .await
            .unwrap();
        repo.commit().await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.command_line, None);
    }

    #[tokio::test]
    async fn update_replaces_all_mutable_fields() {
        let repo = test_repo().await;
        let created = repo.create(migration_command()).await.unwrap();
        repo.commit().await.unwrap();

        let mut changed = created.clone();
        changed.how_to = "Run a .NET Core App".into();
        changed.platform = ".NET Core".into();
        changed.command_line = Some("dotnet run".into());
        repo.update(&changed).await.unwrap();
        repo.commit().await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, changed);
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let repo = test_repo().await;
        let ghost = Command {
            id: 123,
            how_to: "x".into(),
            platform: "y".into(),
            command_line: None,
        };
        let err = repo.update(&ghost).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_then_get_is_none() {
        let repo = test_repo().await;
        let created = repo.create(migration_command()).await.unwrap();
        repo.commit().await.unwrap();

        repo.delete(created.id).await.unwrap();
        repo.commit().await.unwrap();

        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_missing_id_is_not_found() {
        let repo = test_repo().await;
        let err = repo.delete(77).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }
}
