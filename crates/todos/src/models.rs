//! Request and response bodies of the todos API.

use serde::{Deserialize, Serialize};

use todos_core::Todo;

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 100;

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    /// Name of the failed rule: `required`, `min` or `max`.
    pub tag: String,
    /// Rule parameter, empty for `required`.
    pub value: String,
}

impl FieldError {
    fn new(field: &str, tag: &str, value: impl ToString) -> Self {
        Self {
            field: field.to_string(),
            tag: tag.to_string(),
            value: value.to_string(),
        }
    }
}

/// Request payload for creating a todo (POST /todos).
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
}

impl CreateTodo {
    /// Returns the title if it is present and 3 to 100 characters long.
    pub fn validate(self) -> Result<String, Vec<FieldError>> {
        let Some(title) = self.title else {
            return Err(vec![FieldError::new("title", "required", "")]);
        };

        let chars = title.chars().count();
        if chars < TITLE_MIN_CHARS {
            return Err(vec![FieldError::new("title", "min", TITLE_MIN_CHARS)]);
        }
        if chars > TITLE_MAX_CHARS {
            return Err(vec![FieldError::new("title", "max", TITLE_MAX_CHARS)]);
        }

        Ok(title)
    }
}

/// Request payload for PUT /todos/{id}/done.
#[derive(Debug, Deserialize)]
pub struct MarkDone {
    pub done: Option<bool>,
}

impl MarkDone {
    pub fn validate(self) -> Result<bool, Vec<FieldError>> {
        self.done
            .ok_or_else(|| vec![FieldError::new("done", "required", "")])
    }
}

/// Response of POST /todos.
#[derive(Debug, Serialize)]
pub struct CreatedTodo {
    pub id: String,
}

/// Response of GET /todos.
#[derive(Debug, Serialize)]
pub struct TodoList {
    pub data: Vec<Todo>,
}

/// Error body shared by every failing endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
    pub validation_errors: Option<Vec<FieldError>>,
}
