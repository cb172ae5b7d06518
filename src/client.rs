use reqwest::blocking::Response;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::api::dtos::todo::DeletedTodoDTO;
use crate::errors::TodoError;
use crate::models::todo_model::Todo;
use crate::utils::make_api_url;

/// Client for the todo service.
///
/// Keeps a local mirror of the server's list. Each mutating call merges the
/// server's response into the mirror by id, so the rendered state always
/// reflects what the service acknowledged.
pub struct TodoClient {
    http: reqwest::blocking::Client,
    todos: Vec<Todo>,
}

impl TodoClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            todos: Vec::new(),
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Fetch the full list and replace local state with it.
    pub fn refresh(&mut self) -> Result<&[Todo], TodoError> {
        let resp = self
            .http
            .get(make_api_url("todos"))
            .header(CONTENT_TYPE, "application/json")
            .send()?;

        self.todos = parse_response(resp)?;

        Ok(&self.todos)
    }

    /// Submit a new todo and append the service's record locally.
    pub fn add(&mut self, title: &str) -> Result<Todo, TodoError> {
        let resp = self
            .http
            .post(make_api_url("todos"))
            .header(CONTENT_TYPE, "application/json")
            .json::<serde_json::Value>(&serde_json::json!({ "title": title }))
            .send()?;

        let created: Todo = parse_response(resp)?;

        self.todos.push(created.clone());

        Ok(created)
    }

    /// Flip completion on the server, then mirror the returned flag.
    pub fn toggle(&mut self, id: u64) -> Result<Todo, TodoError> {
        let resp = self
            .http
            .put(make_api_url(&format!("todos/{}", id)))
            .send()?;

        let updated: Todo = parse_response(resp)?;

        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.completed = updated.completed;
        }

        Ok(updated)
    }

    /// Delete on the server, then drop the local record by id equality.
    pub fn delete(&mut self, id: u64) -> Result<u64, TodoError> {
        let resp = self
            .http
            .delete(make_api_url(&format!("todos/{}", id)))
            .send()?;

        let deleted: DeletedTodoDTO = parse_response(resp)?;

        self.todos.retain(|todo| todo.id != deleted.id);

        Ok(deleted.id)
    }
}

/// Turn a service response into the expected body, or into a typed error
/// carrying the message out of the `{"error": ...}` payload.
fn parse_response<T: DeserializeOwned>(resp: Response) -> Result<T, TodoError> {
    let status = resp.status();

    if status.is_success() {
        return Ok(resp.json()?);
    }

    let body: serde_json::Value = resp.json().unwrap_or_default();

    let message = body
        .get("error")
        .and_then(|e| e.as_str())
        .unwrap_or("request failed")
        .to_string();

    Err(TodoError::Api {
        status: status.as_u16(),
        message,
    })
}
