use super::dto::{HealthResponse, ListParams, TaskResponse};
use super::error::ApiError;
use super::validation::{parse_task_id, validate_new_task, validate_patch};
use super::AppState;
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};

type ApiResult<T> = Result<T, ApiError>;

pub async fn list_tasks(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<TaskResponse>>> {
    let Query(params) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection, "query rejected");
        ApiError::InvalidQuery
    })?;

    let filter = match params.status.as_deref() {
        None | Some("") => TaskFilter::All,
        Some(raw) => raw.parse::<TaskFilter>().map_err(ApiError::InvalidStatus)?,
    };

    let tasks = state
        .storage
        .list_tasks(filter)
        .map_err(|e| ApiError::internal(Message::TasksFetchFailed, e))?;

    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

pub async fn get_task(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<TaskResponse>> {
    let id = parse_task_id(&id).ok_or(ApiError::InvalidId)?;

    let task = state
        .storage
        .get_task(id)
        .map_err(|e| ApiError::internal(Message::TasksFetchFailed, e))?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(TaskResponse::from(&task)))
}

pub async fn create_task(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let new_task = validate_new_task(&parse_object(body)?)?;

    let task = state
        .storage
        .create_task(&new_task)
        .map_err(|e| ApiError::internal(Message::TaskCreateFailed, e))?;
    tracing::debug!(id = task.id, "task created");

    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<TaskResponse>> {
    let id = parse_task_id(&id).ok_or(ApiError::InvalidId)?;
    let patch = validate_patch(&parse_object(body)?)?;

    let task = state
        .storage
        .update_task(id, &patch)
        .map_err(|e| ApiError::internal(Message::TaskUpdateFailed, e))?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(TaskResponse::from(&task)))
}

pub async fn delete_task(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<StatusCode> {
    let id = parse_task_id(&id).ok_or(ApiError::InvalidId)?;
    let failed = |e| ApiError::internal(Message::TaskDeleteFailed, e);

    if state.storage.get_task(id).map_err(failed)?.is_none() {
        return Err(ApiError::NotFound);
    }

    // Gone between the lookup and the delete.
    if !state.storage.delete_task(id).map_err(failed)? {
        return Err(ApiError::Internal {
            message: Message::TaskDeleteFailed,
            source: None,
        });
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

fn parse_object(body: Result<Bytes, BytesRejection>) -> ApiResult<Map<String, Value>> {
    let body = body.map_err(|rejection| match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::BodyTooLarge,
        _ => ApiError::InvalidBody,
    })?;

    match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(ApiError::InvalidBody),
    }
}
