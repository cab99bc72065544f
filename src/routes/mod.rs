use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(health_check))
        // OpenAPI document
        .route("/api-docs/openapi.json", web::get().to(openapi_spec))
        // User routes
        .service(
            web::scope("/users")
                // Register a new user
                .route("", web::post().to(handlers::register_user))
                // List all users
                .route("", web::get().to(handlers::get_all_users))
                // Get user by email - static segment, no conflict with /{id}
                .route("/email/{email}", web::get().to(handlers::get_user_by_email))
                // Get specific user by ID
                .route("/{id}", web::get().to(handlers::get_user))
                // Partially update a user
                .route("/{id}", web::put().to(handlers::update_user))
                // Delete a user
                .route("/{id}", web::delete().to(handlers::delete_user)),
        );
}

/// Service health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}

async fn openapi_spec() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
