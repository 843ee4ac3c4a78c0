//! # Yarukoto - task management service
//!
//! A small to-do REST API. Tasks are created, listed, completed, reopened and
//! deleted over JSON under `/api`, with Japanese user-facing messages. Tasks
//! are kept in memory by default or in a SQLite database.
//!
//! ## Features
//!
//! - **Task Lifecycle**: Completion time is stamped and cleared automatically
//! - **Storage Backends**: In-memory or SQLite with versioned migrations
//! - **Validation**: Every request body is checked before it reaches the store
//! - **Configuration**: JSON config file, environment overrides, setup wizard
//!
//! ## Usage
//!
//! ```rust,no_run
//! use yarukoto::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
