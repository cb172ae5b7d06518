use inquire::Text;

use crate::client::TodoClient;
use crate::models::todo_model::Todo;

/// Prompt user to create new todo
pub fn create_new_todo() -> Result<(), Box<dyn std::error::Error>> {
    let title = Text::new("Title")
        .with_help_message("Title for your new todo")
        .prompt()?;

    let mut client = TodoClient::new();

    let created = client.add(title.as_str())?;

    println!("Created todo #{}: {}", created.id, created.title);

    Ok(())
}

/// List all the todos
pub fn list_todos() -> Result<(), Box<dyn std::error::Error>> {
    let mut client = TodoClient::new();

    let todos = client.refresh()?;

    render_todo_list(todos);

    Ok(())
}

/// Flip a todo's completion state
pub fn toggle_todo(id: u64) -> Result<(), Box<dyn std::error::Error>> {
    let mut client = TodoClient::new();

    let updated = client.toggle(id)?;

    let state = if updated.completed { "done" } else { "not done" };

    println!("Todo #{} is now {}", updated.id, state);

    Ok(())
}

/// Delete a todo by id
pub fn delete_todo(id: u64) -> Result<(), Box<dyn std::error::Error>> {
    let mut client = TodoClient::new();

    let deleted = client.delete(id)?;

    println!("Deleted todo #{}", deleted);

    Ok(())
}

/// Print the list as-is, one line per todo.
fn render_todo_list(todos: &[Todo]) {
    if todos.is_empty() {
        println!("No todos yet");
        return;
    }

    for todo in todos {
        let mark = if todo.completed { "x" } else { " " };

        println!("[{}] #{} {}", mark, todo.id, todo.title);
    }
}
