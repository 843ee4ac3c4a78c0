//! Task entity and the commands that create and modify it.
//!
//! The stored [`Task`] is kept separate from the validated commands that
//! produce it ([`NewTask`]) and change it ([`TaskPatch`]). Clients never write
//! `id`, `created_at` or `completed_at` directly; the only way to move a task
//! through its lifecycle is [`Task::apply`], which both storage backends call.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Utc;
//! use yarukoto::libs::task::{NewTask, Task, TaskPatch};
//!
//! let mut task = Task::new(1, &NewTask::new("Buy milk", None), Utc::now());
//! task.apply(&TaskPatch::completed(true), Utc::now());
//! assert!(task.completed_at.is_some());
//! ```

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum description length, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Builds a fresh, incomplete task with a store-assigned id.
    pub fn new(id: i64, new_task: &NewTask, now: DateTime<Utc>) -> Self {
        Task {
            id,
            title: new_task.title.clone(),
            description: new_task.description.clone().unwrap_or_default(),
            completed: false,
            created_at: now,
            completed_at: None,
        }
    }

    /// Merges `patch` over the task, then settles `completed_at`.
    ///
    /// A transition to complete stamps `now` only when the task was not
    /// already complete, so an existing completion time is never reset.
    /// A transition to incomplete always clears the stamp. Patches that do
    /// not mention `completed` leave `completed_at` alone.
    pub fn apply(&mut self, patch: &TaskPatch, now: DateTime<Utc>) {
        let was_completed = self.completed;

        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }

        if let Some(completed) = patch.completed {
            self.completed = completed;
            self.completed_at = match (completed, was_completed) {
                (true, false) => Some(now),
                (true, true) => self.completed_at.or(Some(now)),
                (false, _) => None,
            };
        }
    }

    pub fn matches(&self, filter: TaskFilter) -> bool {
        match filter {
            TaskFilter::All => true,
            TaskFilter::Active => !self.completed,
            TaskFilter::Completed => self.completed,
        }
    }
}

/// Validated input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
}

impl NewTask {
    pub fn new(title: &str, description: Option<&str>) -> Self {
        NewTask {
            title: title.to_string(),
            description: description.map(str::to_string),
        }
    }
}

/// Validated partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn completed(completed: bool) -> Self {
        TaskPatch {
            completed: Some(completed),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TaskFilter::All),
            "active" => Ok(TaskFilter::Active),
            "completed" => Ok(TaskFilter::Completed),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskFilter::All => "all",
            TaskFilter::Active => "active",
            TaskFilter::Completed => "completed",
        };
        f.write_str(name)
    }
}
