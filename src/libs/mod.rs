//! Core library modules for yarukoto.
//!
//! ## Features
//!
//! - **Domain**: Task and user entities, the task lifecycle rules
//! - **Core Infrastructure**: Configuration, data directory, messaging
//! - **User Interface**: Console tables for the CLI commands
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Utc;
//! use yarukoto::libs::task::{NewTask, Task, TaskFilter};
//!
//! let task = Task::new(1, &NewTask::new("Write report", Some("Q3 numbers")), Utc::now());
//! assert!(task.matches(TaskFilter::Active));
//! ```

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod task;
pub mod user;
pub mod view;
