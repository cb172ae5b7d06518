use actix_web::{web, HttpResponse};
use serde_json::json;

use super::errors::TodoApiError;
use crate::api::dtos::todo::CreateTodoDTO;
use crate::store::TodoStore;

/// Api handler for getting all todos
pub async fn get_todos(store: web::Data<TodoStore>) -> Result<HttpResponse, actix_web::Error> {
    let list = store.list();

    Ok(HttpResponse::Ok().json(&list))
}

/// Create a new todo
pub async fn create_todo(
    request_data: web::Json<CreateTodoDTO>,
    store: web::Data<TodoStore>,
) -> Result<HttpResponse, actix_web::Error> {
    let request_data = request_data.into_inner();

    if request_data.title.trim().is_empty() {
        return Err(TodoApiError::BadRequest(String::from("Title must not be empty")).into());
    }

    let inserted = store.create(
        request_data.title,
        request_data.completed.unwrap_or(false),
    );

    Ok(HttpResponse::Ok().json(&inserted))
}

/// Update a Todo's completeness
pub async fn toggle_todo(
    todo_id: web::Path<u64>,
    store: web::Data<TodoStore>,
) -> Result<HttpResponse, actix_web::Error> {
    let updated = store
        .toggle(todo_id.into_inner())
        .ok_or_else(|| TodoApiError::NotFound(String::from("Todo")))?;

    Ok(HttpResponse::Ok().json(&updated))
}

/// Api to Delete a TODO
pub async fn delete_todo(
    todo_id: web::Path<u64>,
    store: web::Data<TodoStore>,
) -> Result<HttpResponse, actix_web::Error> {
    let removed = store
        .remove(todo_id.into_inner())
        .ok_or_else(|| TodoApiError::NotFound(String::from("Todo")))?;

    Ok(HttpResponse::Ok().json(json!({ "id": removed })))
}

#[cfg(test)]
mod test {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};

    use crate::api::api::routes;
    use crate::models::todo_model::Todo;
    use crate::store::TodoStore;

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(TodoStore::new()))
                    .configure(routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_list_starts_empty() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/todos").to_request();
        let todos: Vec<Todo> = test::call_and_read_body_json(&app, req).await;

        assert!(todos.is_empty());
    }

    #[actix_web::test]
    async fn test_create_toggle_delete_scenario() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/todos")
            .set_json(serde_json::json!({ "title": "Learn Node.js" }))
            .to_request();
        let created: Todo = test::call_and_read_body_json(&app, req).await;

        assert_eq!(created.title, "Learn Node.js");
        assert_eq!(created.completed, false);

        let req = test::TestRequest::get().uri("/todos").to_request();
        let todos: Vec<Todo> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(todos, vec![created.clone()]);

        let req = test::TestRequest::put()
            .uri(&format!("/todos/{}", created.id))
            .to_request();
        let toggled: Todo = test::call_and_read_body_json(&app, req).await;

        assert_eq!(toggled.completed, true);

        let req = test::TestRequest::delete()
            .uri(&format!("/todos/{}", created.id))
            .to_request();
        let deleted: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(deleted, serde_json::json!({ "id": created.id }));

        let req = test::TestRequest::get().uri("/todos").to_request();
        let todos: Vec<Todo> = test::call_and_read_body_json(&app, req).await;

        assert!(todos.is_empty());
    }

    #[actix_web::test]
    async fn test_create_assigns_server_side_ids() {
        let app = test_app!();

        // Client-supplied ids are dropped on the floor.
        let req = test::TestRequest::post()
            .uri("/todos")
            .set_json(serde_json::json!({ "id": 999, "title": "Learn React.js" }))
            .to_request();
        let first: Todo = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/todos")
            .set_json(serde_json::json!({ "title": "Learn Angular.js" }))
            .to_request();
        let second: Todo = test::call_and_read_body_json(&app, req).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[actix_web::test]
    async fn test_create_rejects_empty_title() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/todos")
            .set_json(serde_json::json!({ "title": "  " }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_create_respects_completed_flag() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/todos")
            .set_json(serde_json::json!({ "title": "already done", "completed": true }))
            .to_request();
        let created: Todo = test::call_and_read_body_json(&app, req).await;

        assert_eq!(created.completed, true);
    }

    #[actix_web::test]
    async fn test_toggle_unknown_id_is_not_found() {
        let app = test_app!();

        let req = test::TestRequest::put().uri("/todos/42").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        // Service keeps answering after the miss.
        let req = test::TestRequest::get().uri("/todos").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_delete_unknown_id_is_not_found() {
        let app = test_app!();

        let req = test::TestRequest::delete().uri("/todos/42").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_error_body_is_json() {
        let app = test_app!();

        let req = test::TestRequest::put().uri("/todos/42").to_request();
        let res = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(res).await;

        assert_eq!(body, serde_json::json!({ "error": "Todo Not Found" }));
    }
}
