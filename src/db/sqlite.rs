use super::db::Db;
use super::storage::{Storage, StorageError};
use super::tasks::Tasks;
use super::users::Users;
use crate::libs::task::{NewTask, Task, TaskFilter, TaskPatch};
use crate::libs::user::{NewUser, User};
use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{Connection, ErrorCode};
use std::path::{Path, PathBuf};

/// SQLite-backed store. One connection, serialized by a mutex.
pub struct SqliteStorage {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteStorage {
    /// Opens the database file at `path`, migrating it to the current schema.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let db = Db::open(path).map_err(|e| StorageError::Setup(e.to_string()))?;
        Ok(Self::from_db(db, Some(path.to_path_buf())))
    }

    /// Throwaway database that lives as long as the store.
    pub fn in_memory() -> Result<Self, StorageError> {
        let db = Db::in_memory().map_err(|e| StorageError::Setup(e.to_string()))?;
        Ok(Self::from_db(db, None))
    }

    fn from_db(db: Db, path: Option<PathBuf>) -> Self {
        SqliteStorage {
            conn: Mutex::new(db.conn),
            path,
        }
    }
}

impl Storage for SqliteStorage {
    fn list_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>, StorageError> {
        let conn = self.conn.lock();
        Ok(Tasks::new(&conn).fetch(filter)?)
    }

    fn get_task(&self, id: i64) -> Result<Option<Task>, StorageError> {
        let conn = self.conn.lock();
        Ok(Tasks::new(&conn).get_by_id(id)?)
    }

    fn create_task(&self, new_task: &NewTask) -> Result<Task, StorageError> {
        let conn = self.conn.lock();
        Ok(Tasks::new(&conn).insert(new_task, Utc::now())?)
    }

    fn update_task(&self, id: i64, patch: &TaskPatch) -> Result<Option<Task>, StorageError> {
        let conn = self.conn.lock();
        Ok(Tasks::new(&conn).update(id, patch, Utc::now())?)
    }

    fn delete_task(&self, id: i64) -> Result<bool, StorageError> {
        let conn = self.conn.lock();
        Ok(Tasks::new(&conn).delete(id)?)
    }

    fn get_user(&self, id: i64) -> Result<Option<User>, StorageError> {
        let conn = self.conn.lock();
        Ok(Users::new(&conn).get_by_id(id)?)
    }

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let conn = self.conn.lock();
        Ok(Users::new(&conn).get_by_username(username)?)
    }

    fn create_user(&self, new_user: &NewUser) -> Result<User, StorageError> {
        let conn = self.conn.lock();
        Users::new(&conn).insert(new_user).map_err(|e| match e.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => StorageError::DuplicateUsername(new_user.username.clone()),
            _ => StorageError::Database(e),
        })
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(path) => format!("sqlite ({})", path.display()),
            None => "sqlite (in-memory)".to_string(),
        }
    }
}
