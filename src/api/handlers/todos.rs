// src/api/handlers/todos.rs
use actix_web::{HttpResponse, Result, web};
use serde_json::json;

use crate::api::AppState;
use crate::database;
use crate::models::NewTodo;

/// POST /api/todo - Create a todo, returning the persisted record.
pub async fn create_todo(
    state: web::Data<AppState>,
    req: web::Json<NewTodo>,
) -> Result<HttpResponse> {
    match database::create_todo(&state.db_pool, req.into_inner()).await {
        Ok(todo) => Ok(HttpResponse::Created().json(todo)),
        Err(e) => {
            log::error!("Failed to create todo: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to create todo"
            })))
        }
    }
}

/// GET /api/todos - List all todos.
pub async fn list_todos(state: web::Data<AppState>) -> Result<HttpResponse> {
    match database::get_all_todos(&state.db_pool).await {
        Ok(todos) => Ok(HttpResponse::Ok().json(todos)),
        Err(e) => {
            log::error!("Failed to fetch todos: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to fetch todos"
            })))
        }
    }
}
