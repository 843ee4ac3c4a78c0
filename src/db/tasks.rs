use crate::libs::task::{NewTask, Task, TaskFilter, TaskPatch};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, completed, created_at, completed_at) VALUES (?1, ?2, FALSE, ?3, NULL)";
const SELECT_TASKS: &str = "SELECT id, title, description, completed, created_at, completed_at FROM tasks";
const WHERE_ACTIVE: &str = "WHERE completed = FALSE";
const WHERE_COMPLETED: &str = "WHERE completed = TRUE";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_BY_ID: &str = "ORDER BY id";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, completed = ?4, completed_at = ?5 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// Task queries over a borrowed connection.
pub struct Tasks<'c> {
    conn: &'c Connection,
}

impl<'c> Tasks<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Tasks { conn }
    }

    pub fn insert(&self, new_task: &NewTask, now: DateTime<Utc>) -> Result<Task> {
        let description = new_task.description.clone().unwrap_or_default();
        self.conn.execute(INSERT_TASK, params![new_task.title, description, now])?;

        Ok(Task::new(self.conn.last_insert_rowid(), new_task, now))
    }

    pub fn fetch(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        let query = match filter {
            TaskFilter::All => format!("{} {}", SELECT_TASKS, ORDER_BY_ID),
            TaskFilter::Active => format!("{} {} {}", SELECT_TASKS, WHERE_ACTIVE, ORDER_BY_ID),
            TaskFilter::Completed => format!("{} {} {}", SELECT_TASKS, WHERE_COMPLETED, ORDER_BY_ID),
        };

        let mut stmt = self.conn.prepare(&query)?;
        let task_iter = stmt.query_map([], map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], map_row)
            .optional()
    }

    /// Read-modify-write inside one transaction.
    pub fn update(&self, id: i64, patch: &TaskPatch, now: DateTime<Utc>) -> Result<Option<Task>> {
        let tx = self.conn.unchecked_transaction()?;

        let mut task = match Tasks::new(&tx).get_by_id(id)? {
            Some(task) => task,
            None => return Ok(None),
        };
        task.apply(patch, now);

        tx.execute(
            UPDATE_TASK,
            params![task.id, task.title, task.description, task.completed, task.completed_at],
        )?;
        tx.commit()?;

        Ok(Some(task))
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        Ok(affected > 0)
    }
}

fn map_row(row: &Row<'_>) -> Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        completed: row.get(3)?,
        created_at: row.get(4)?,
        completed_at: row.get(5)?,
    })
}
