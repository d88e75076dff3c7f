use axum::{response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::database::models::TodoItem;

/// Public wire shape of a to-do record: `{id, title, done}`.
/// The owner identifier never leaves the server.
#[derive(Debug, Clone, Serialize)]
pub struct TodoDto {
    pub id: String,
    pub title: String,
    pub done: bool,
}

impl From<TodoItem> for TodoDto {
    fn from(todo: TodoItem) -> Self {
        Self {
            id: todo.id.map(|id| id.to_string()).unwrap_or_default(),
            title: todo.title,
            done: todo.done,
        }
    }
}

/// POST body. Carries no identifier field, so a client-supplied id is
/// dropped by decoding before it can reach the service.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

/// PUT body. The identifier locates the row to overwrite.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub id: String,
    pub title: String,
    pub done: bool,
}

/// DELETE body
#[derive(Debug, Deserialize)]
pub struct DeleteTodoRequest {
    pub id: String,
}

/// The uniform `{data, error}` response wrapper. Exactly one of the two
/// fields is populated; the other serializes as null.
#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    pub data: Option<Vec<TodoDto>>,
    pub error: Option<String>,
}

impl ResponseEnvelope {
    pub fn data(items: Vec<TodoItem>) -> Self {
        Self {
            data: Some(items.into_iter().map(TodoDto::from).collect()),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}
