use super::storage::{Storage, StorageError};
use crate::libs::task::{NewTask, Task, TaskFilter, TaskPatch};
use crate::libs::user::{NewUser, User};
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::BTreeMap;

/// Process-local store. Ids start at 1 and are never reused, so the
/// id-ordered maps also preserve insertion order.
pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

struct Inner {
    tasks: BTreeMap<i64, Task>,
    users: BTreeMap<i64, User>,
    next_task_id: i64,
    next_user_id: i64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage {
            inner: Mutex::new(Inner {
                tasks: BTreeMap::new(),
                users: BTreeMap::new(),
                next_task_id: 1,
                next_user_id: 1,
            }),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn list_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>, StorageError> {
        let inner = self.inner.lock();
        Ok(inner.tasks.values().filter(|task| task.matches(filter)).cloned().collect())
    }

    fn get_task(&self, id: i64) -> Result<Option<Task>, StorageError> {
        Ok(self.inner.lock().tasks.get(&id).cloned())
    }

    fn create_task(&self, new_task: &NewTask) -> Result<Task, StorageError> {
        let mut inner = self.inner.lock();
        let id = inner.next_task_id;
        inner.next_task_id += 1;

        let task = Task::new(id, new_task, Utc::now());
        inner.tasks.insert(id, task.clone());
        Ok(task)
    }

    fn update_task(&self, id: i64, patch: &TaskPatch) -> Result<Option<Task>, StorageError> {
        let mut inner = self.inner.lock();
        let updated = inner.tasks.get_mut(&id).map(|task| {
            task.apply(patch, Utc::now());
            task.clone()
        });
        Ok(updated)
    }

    fn delete_task(&self, id: i64) -> Result<bool, StorageError> {
        Ok(self.inner.lock().tasks.remove(&id).is_some())
    }

    fn get_user(&self, id: i64) -> Result<Option<User>, StorageError> {
        Ok(self.inner.lock().users.get(&id).cloned())
    }

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let inner = self.inner.lock();
        Ok(inner.users.values().find(|user| user.username == username).cloned())
    }

    fn create_user(&self, new_user: &NewUser) -> Result<User, StorageError> {
        let mut inner = self.inner.lock();
        if inner.users.values().any(|user| user.username == new_user.username) {
            return Err(StorageError::DuplicateUsername(new_user.username.clone()));
        }

        let id = inner.next_user_id;
        inner.next_user_id += 1;

        let user = User::from_new(id, new_user);
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
