use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::models::todo_model::Todo;

/// In-memory holder of the todo collection.
///
/// Owns all mutation; handlers never touch the list directly. Ids are
/// assigned here from a monotonic counter so uniqueness holds no matter
/// what the client sends.
pub struct TodoStore {
    todos: Mutex<Vec<Todo>>,
    next_id: AtomicU64,
}

impl TodoStore {
    pub fn new() -> Self {
        TodoStore {
            todos: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn todos(&self) -> MutexGuard<'_, Vec<Todo>> {
        // A panic while holding the lock cannot leave the list half-mutated,
        // so a poisoned guard is still usable.
        self.todos.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of the full list, insertion order preserved.
    pub fn list(&self) -> Vec<Todo> {
        self.todos().clone()
    }

    /// Append a new todo under a freshly assigned id and return it.
    pub fn create(&self, title: String, completed: bool) -> Todo {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let todo = Todo::new(id, title, completed);

        self.todos().push(todo.clone());

        todo
    }

    /// Flip `completed` on the matching todo, returning the updated record.
    pub fn toggle(&self, id: u64) -> Option<Todo> {
        let mut todos = self.todos();

        let todo = todos.iter_mut().find(|todo| todo.id == id)?;
        todo.completed = !todo.completed;

        Some(todo.clone())
    }

    /// Remove the matching todo. Returns the id only if something was
    /// actually removed.
    pub fn remove(&self, id: u64) -> Option<u64> {
        let mut todos = self.todos();

        let count_before = todos.len();
        todos.retain(|todo| todo.id != id);

        if todos.len() < count_before {
            Some(id)
        } else {
            None
        }
    }
}
