use serde::{Deserialize, Serialize};

/// Body for `POST /todos`. A client-supplied `id` is ignored, the store
/// assigns its own.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateTodoDTO {
    pub title: String,
    pub completed: Option<bool>,
}

/// Body returned by `DELETE /todos/{id}`.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeletedTodoDTO {
    pub id: u64,
}
