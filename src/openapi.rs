use utoipa::OpenApi;

use crate::models::{
    ErrorResponse, HealthResponse, RegisterUserRequest, UpdateUserRequest, UserResponse,
};

/// OpenAPI documentation for the user service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "REST API for registering and managing user records."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User management endpoints (CRUD operations)")
    ),
    paths(
        crate::handlers::register_user,
        crate::handlers::get_all_users,
        crate::handlers::get_user,
        crate::handlers::get_user_by_email,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::routes::health_check
    ),
    components(
        schemas(
            RegisterUserRequest,
            UpdateUserRequest,
            UserResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
