//! In-memory implementation of the `CommandRepository` trait.
//!
//! Used by adapter tests in place of a mocking framework, and useful for
//! running the API without a database. Staging is literal here: mutations
//! buffer in a pending list and only become visible once `commit` applies
//! them to the committed map.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CommandRepository, RepositoryError};
use crate::domain::{Command, NewCommand};

/// A staged mutation awaiting `commit`.
#[derive(Debug, Clone)]
enum StagedOp {
    Insert(Command),
    Replace(Command),
    Remove(i64),
}

#[derive(Debug)]
struct Inner {
    committed: BTreeMap<i64, Command>,
    staged: Vec<StagedOp>,
    next_id: i64,
}

/// In-memory implementation of the `CommandRepository` trait.
#[derive(Debug)]
pub struct InMemoryCommandRepository {
    inner: Mutex<Inner>,
}

impl Default for InMemoryCommandRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCommandRepository {
    /// Create an empty in-memory repository. IDs start at 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                committed: BTreeMap::new(),
                staged: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, RepositoryError> {
        self.inner
            .lock()
            .map_err(|_| RepositoryError::Storage("repository lock poisoned".into()))
    }
}

impl Inner {
    /// Whether `id` exists in the committed map or among staged inserts.
    fn exists(&self, id: i64) -> bool {
        self.committed.contains_key(&id)
            || self
                .staged
                .iter()
                .any(|op| matches!(op, StagedOp::Insert(c) if c.id == id))
    }
}

#[async_trait]
impl CommandRepository for InMemoryCommandRepository {
    async fn list(&self) -> Result<Vec<Command>, RepositoryError> {
        Ok(self.lock()?.committed.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Command>, RepositoryError> {
        Ok(self.lock()?.committed.get(&id).cloned())
    }

    async fn create(&self, command: NewCommand) -> Result<Command, RepositoryError> {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;
        let command = command.into_command(id);
        inner.staged.push(StagedOp::Insert(command.clone()));
        Ok(command)
    }

    async fn update(&self, command: &Command) -> Result<(), RepositoryError> {
        let mut inner = self.lock()?;
        if !inner.exists(command.id) {
            return Err(RepositoryError::NotFound(format!(
                "Command with ID {}",
                command.id
            )));
        }
        inner.staged.push(StagedOp::Replace(command.clone()));
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut inner = self.lock()?;
        if !inner.exists(id) {
            return Err(RepositoryError::NotFound(format!("Command with ID {id}")));
        }
        inner.staged.push(StagedOp::Remove(id));
        Ok(())
    }

    async fn commit(&self) -> Result<(), RepositoryError> {
        let mut inner = self.lock()?;
        let staged = std::mem::take(&mut inner.staged);
        for op in staged {
            match op {
                StagedOp::Insert(c) | StagedOp::Replace(c) => {
                    inner.committed.insert(c.id, c);
                }
                StagedOp::Remove(id) => {
                    inner.committed.remove(&id);
                }
            }
        }
        Ok(())
    }
}
