//! The task store contract shared by every backend.
//!
//! The API layer only ever sees `Arc<dyn Storage>`. A store is built once at
//! start-up by [`open`] and handed to the router, so tests can construct a
//! fresh instance per case.
//!
//! Each method is one complete store operation. "Not found" is an ordinary
//! outcome (`None` / `false`), never an error; errors are reserved for the
//! backend itself failing.

use super::memory::MemoryStorage;
use super::sqlite::SqliteStorage;
use crate::libs::config::{Config, StorageBackend};
use crate::libs::data_storage::DataStorage;
use crate::libs::task::{NewTask, Task, TaskFilter, TaskPatch};
use crate::libs::user::{NewUser, User};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("database setup failed: {0}")]
    Setup(String),

    #[error("username '{0}' is already taken")]
    DuplicateUsername(String),
}

pub trait Storage: Send + Sync {
    /// Tasks matching `filter`, oldest first.
    fn list_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>, StorageError>;

    fn get_task(&self, id: i64) -> Result<Option<Task>, StorageError>;

    /// Stores a new incomplete task under a fresh id.
    fn create_task(&self, new_task: &NewTask) -> Result<Task, StorageError>;

    /// Applies `patch` to the task, or returns `None` if `id` is unknown.
    fn update_task(&self, id: i64, patch: &TaskPatch) -> Result<Option<Task>, StorageError>;

    /// Hard delete. `false` when there was nothing to delete.
    fn delete_task(&self, id: i64) -> Result<bool, StorageError>;

    fn get_user(&self, id: i64) -> Result<Option<User>, StorageError>;

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;

    fn create_user(&self, new_user: &NewUser) -> Result<User, StorageError>;

    /// Short human-readable description of the backend, for logs.
    fn describe(&self) -> String;
}

/// Builds the store selected by `config`.
pub fn open(config: &Config, data_storage: &DataStorage) -> anyhow::Result<Arc<dyn Storage>> {
    let storage: Arc<dyn Storage> = match config.storage_or_default().backend {
        StorageBackend::Memory => Arc::new(MemoryStorage::new()),
        StorageBackend::Sqlite => {
            let path = config.database_path(data_storage)?;
            Arc::new(SqliteStorage::open(&path)?)
        }
    };

    Ok(storage)
}
