mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod validators;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use sqlx::sqlite::SqlitePoolOptions;

use crate::config::CONFIG;
use crate::repositories::SqliteUserRepository;
use crate::services::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to the database
    info!("Connecting to database at {}", CONFIG.database_url);
    let pool = SqlitePoolOptions::new()
        .max_connections(CONFIG.max_db_connections)
        .connect(&CONFIG.database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");
    info!("Database migrations applied");

    // Initialize services
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let user_service = web::Data::new(UserService::new(repository));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
