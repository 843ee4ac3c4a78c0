//! Data persistence layer for the yarukoto service.
//!
//! Tasks and users are kept behind the [`storage::Storage`] trait, with two
//! interchangeable backends:
//!
//! - **Memory** ([`memory::MemoryStorage`]): id-ordered maps behind a mutex,
//!   lost when the process exits
//! - **SQLite** ([`sqlite::SqliteStorage`]): a single connection with a
//!   versioned schema managed by [`migrations`]
//!
//! ## Usage
//!
//! ```rust
//! use yarukoto::db::memory::MemoryStorage;
//! use yarukoto::db::storage::Storage;
//! use yarukoto::libs::task::{NewTask, TaskPatch};
//!
//! let storage = MemoryStorage::new();
//! let task = storage.create_task(&NewTask::new("Review code", Some("Check PR #123")))?;
//! let done = storage.update_task(task.id, &TaskPatch::completed(true))?.unwrap();
//! assert!(done.completed_at.is_some());
//! # Ok::<(), yarukoto::db::storage::StorageError>(())
//! ```

/// SQLite connection management and initialization.
pub mod db;

/// In-memory task store.
pub mod memory;

/// Versioned schema changes for the SQLite backend.
pub mod migrations;

/// Demo content for an empty store.
pub mod seed;

/// SQLite task store built on [`tasks`] and [`users`].
pub mod sqlite;

/// The store contract and backend selection.
pub mod storage;

/// Task table queries.
pub mod tasks;

/// User table queries.
pub mod users;
