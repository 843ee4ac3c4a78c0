//! HTTP API for task management.
//!
//! All routes live under `/api` and speak JSON. Error bodies are
//! `{"message": "..."}` with Japanese text meant to be shown to end users,
//! including unknown routes, unsupported methods and oversized bodies.
//!
//! ## Routes
//!
//! - `GET /api/health`: liveness and version
//! - `GET /api/tasks[?status=all|active|completed]`: list in id order
//! - `POST /api/tasks`: create from `{title, description?}`
//! - `GET /api/tasks/{id}`: fetch one task
//! - `PATCH /api/tasks/{id}`: partial update of `title`, `description`, `completed`
//! - `DELETE /api/tasks/{id}`: remove a task
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use yarukoto::api::{create_router, AppState};
//! use yarukoto::db::memory::MemoryStorage;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let router = create_router(AppState::new(Arc::new(MemoryStorage::new())));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, router).await?;
//! # Ok(())
//! # }
//! ```

use crate::db::storage::Storage;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod error;
pub mod handlers;
pub mod validation;

pub use error::ApiError;

/// Largest accepted request body. A maximal task is a few kilobytes.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Shared handler state: the task store, injected once at start-up.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        AppState { storage }
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/tasks", get(handlers::list_tasks).post(handlers::create_task))
        .route(
            "/tasks/{id}",
            get(handlers::get_task).patch(handlers::update_task).delete(handlers::delete_task),
        )
        .method_not_allowed_fallback(handlers::method_not_allowed);

    Router::new()
        .nest("/api", api)
        .fallback(handlers::route_not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
