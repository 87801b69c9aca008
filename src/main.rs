use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware};

use prompt_verify::api::{AppState, configure_routes};
use prompt_verify::{banner, config, database};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    banner::print_banner();

    // Load .env file - warn loudly if it doesn't exist
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Warning: Could not load .env file: {}", e);
        eprintln!("Make sure OPEN_AI_KEY and DATABASE_URL are set in your environment");
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = config::AppConfig::from_env()
        .expect("Failed to load app configuration from environment");

    let db_pool = database::init_db()
        .await
        .expect("Failed to initialize database");

    let state = AppState::new(app_config, db_pool);

    log::info!("Starting server at http://0.0.0.0:8080");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(actix_web::web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(("0.0.0.0", 8080))?
    .run()
    .await
}
