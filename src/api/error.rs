use super::dto::ErrorResponse;
use super::validation::ValidationError;
use crate::db::storage::StorageError;
use crate::libs::messages::Message;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Every way a task request can fail, mapped to a status and a
/// `{"message": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", Message::InvalidTaskId)]
    InvalidId,

    #[error("{}", Message::InvalidRequestBody)]
    InvalidBody,

    #[error("{}", Message::RequestBodyTooLarge)]
    BodyTooLarge,

    #[error("{}", Message::InvalidQueryString)]
    InvalidQuery,

    #[error("{}", invalid_status(.0))]
    InvalidStatus(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}", Message::TaskNotFound)]
    NotFound,

    #[error("{}", Message::RouteNotFound)]
    RouteNotFound,

    #[error("{}", Message::MethodNotAllowed)]
    MethodNotAllowed,

    /// Store failure. Only `message` reaches the client.
    #[error("{message}")]
    Internal {
        message: Message,
        #[source]
        source: Option<StorageError>,
    },
}

fn invalid_status(raw: &str) -> Message {
    Message::InvalidStatusFilter(raw.to_string())
}

impl ApiError {
    pub fn internal(message: Message, source: StorageError) -> Self {
        ApiError::Internal {
            message,
            source: Some(source),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId
            | ApiError::InvalidBody
            | ApiError::InvalidQuery
            | ApiError::InvalidStatus(_)
            | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let ApiError::Internal { message, source } = &self {
            match source {
                Some(source) => tracing::error!(error = %source, "{}", message),
                None => tracing::error!("{}", message),
            }
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
