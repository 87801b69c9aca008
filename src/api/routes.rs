// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health_check))
            .route("/todo", web::post().to(handlers::create_todo))
            .route("/todos", web::get().to(handlers::list_todos))
            .service(
                web::scope("/verify")
                    .route("", web::post().to(handlers::verify))
                    .route("/test", web::post().to(handlers::run_consistency_test)),
            ),
    );
}
