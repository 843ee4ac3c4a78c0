//! Request validation for the task endpoints.
//!
//! Bodies arrive as raw JSON and are checked field by field before anything
//! reaches the store. Every rule that fails is collected, so a client sees all
//! problems with a request at once.

use crate::libs::messages::Message;
use crate::libs::task::{NewTask, TaskPatch, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use serde_json::{Map, Value};
use thiserror::Error;

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: Message,
}

impl FieldError {
    fn new(field: &str, message: Message) -> Self {
        FieldError {
            field: field.to_string(),
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", Message::ValidationFailed(join_field_errors(.errors)))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} ({})", e.message, e.field))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parses a path segment as a task id. Only plain base-10 integers pass.
pub fn parse_task_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        return None;
    }
    raw.parse::<i64>().ok()
}

/// Validates a create body. Unknown keys are ignored.
pub fn validate_new_task(body: &Map<String, Value>) -> Result<NewTask, ValidationError> {
    let mut errors = Vec::new();

    let title = match body.get("title") {
        None | Some(Value::Null) => {
            errors.push(FieldError::new("title", Message::TitleRequired));
            None
        }
        Some(value) => check_title(value, &mut errors),
    };

    let description = match body.get("description") {
        None => None,
        Some(value) => check_description(value, &mut errors),
    };

    match title {
        Some(title) if errors.is_empty() => Ok(NewTask { title, description }),
        _ => Err(ValidationError { errors }),
    }
}

/// Validates a PATCH body. Every present field must pass its rule and no other
/// keys are allowed; `{}` is a valid no-op.
pub fn validate_patch(body: &Map<String, Value>) -> Result<TaskPatch, ValidationError> {
    let mut errors = Vec::new();
    let mut patch = TaskPatch::default();

    for (key, value) in body {
        match key.as_str() {
            "title" => patch.title = check_title(value, &mut errors),
            "description" => patch.description = check_description(value, &mut errors),
            "completed" => match value {
                Value::Bool(completed) => patch.completed = Some(*completed),
                _ => errors.push(FieldError::new("completed", Message::CompletedNotBoolean)),
            },
            other => errors.push(FieldError::new(other, Message::FieldNotUpdatable(other.to_string()))),
        }
    }

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationError { errors })
    }
}

fn check_title(value: &Value, errors: &mut Vec<FieldError>) -> Option<String> {
    let Value::String(title) = value else {
        errors.push(FieldError::new("title", Message::TitleNotString));
        return None;
    };

    if title.is_empty() {
        errors.push(FieldError::new("title", Message::TitleRequired));
        None
    } else if title.chars().count() > TITLE_MAX_CHARS {
        errors.push(FieldError::new("title", Message::TitleTooLong(TITLE_MAX_CHARS)));
        None
    } else {
        Some(title.clone())
    }
}

fn check_description(value: &Value, errors: &mut Vec<FieldError>) -> Option<String> {
    let Value::String(description) = value else {
        errors.push(FieldError::new("description", Message::DescriptionNotString));
        return None;
    };

    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        errors.push(FieldError::new("description", Message::DescriptionTooLong(DESCRIPTION_MAX_CHARS)));
        None
    } else {
        Some(description.clone())
    }
}
