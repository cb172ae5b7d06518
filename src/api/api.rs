use actix_cors::Cors;
use actix_web::{self, middleware, web, App, HttpServer};

use crate::store::TodoStore;

use super::todos_handler;

/// Routing table, shared between the server and the handler tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/todos")
            .route("", web::get().to(todos_handler::get_todos))
            .route("", web::post().to(todos_handler::create_todo))
            .route("/{id}", web::put().to(todos_handler::toggle_todo))
            .route("/{id}", web::delete().to(todos_handler::delete_todo)),
    );
}

#[actix_web::main]
pub async fn start_server() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    std::env::set_var(
        "RUST_LOG",
        "todo_app=debug,actix_web=info,actix_server=info",
    );

    env_logger::init();

    let api_url = std::env::var("API_URL").unwrap_or(String::from("localhost:5900"));

    let store = web::Data::new(TodoStore::new());

    log::info!("todo server listening on {}", api_url);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(routes)
    })
    .workers(1) // Num of threads
    .bind(api_url.as_str())?
    .run()
    .await
}
