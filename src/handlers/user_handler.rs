//! User management handlers for CRUD operations.

use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::errors::ApiError;
use crate::models::{RegisterUserRequest, UpdateUserRequest, UserResponse};
use crate::services::UserService;

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request payload", body = crate::models::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::models::ErrorResponse)
    )
)]
pub async fn register_user(
    user_service: web::Data<UserService>,
    body: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("REST: Register user request for email: {}", body.email);

    let created = user_service.register(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(created)))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    info!("REST: Get user by ID: {}", user_id);

    let user = user_service.get_user_by_id(user_id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Get a specific user by email.
///
/// Absence on this path is a plain 404 with an empty body rather than a
/// domain error.
#[utoipa::path(
    get,
    path = "/users/email/{email}",
    tag = "Users",
    params(
        ("email" = String, Path, description = "User email address")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "No user with this email")
    )
)]
pub async fn get_user_by_email(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let email = path.into_inner();
    info!("REST: Get user by email: {}", email);

    match user_service.get_user_by_email(&email).await? {
        Some(user) => Ok(HttpResponse::Ok().json(UserResponse::from(user))),
        None => {
            debug!("No user found with email: {}", email);
            Ok(HttpResponse::NotFound().finish())
        }
    }
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = [UserResponse])
    )
)]
pub async fn get_all_users(
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, ApiError> {
    info!("REST: Get all users");

    let users = user_service.get_all_users().await?;
    let responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(responses))
}

/// Partially update a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
    body: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    info!("REST: Update user with ID: {}", user_id);

    let updated = user_service.update_user(user_id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    info!("REST: Delete user with ID: {}", user_id);

    user_service.delete_user(user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::json;

    use crate::models::UserResponse;
    use crate::repositories::memory::InMemoryUserRepository;
    use crate::routes::configure_routes;
    use crate::services::UserService;

    fn user_service() -> web::Data<UserService> {
        web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::default())))
    }

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(user_service())
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_register_returns_created_record() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"name": "Alice", "email": "alice@example.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "id": 1,
                "name": "Alice",
                "email": "alice@example.com",
                "phoneNumber": null,
                "upiId": null
            })
        );
    }

    #[actix_web::test]
    async fn test_register_duplicate_email_is_conflict() {
        let app = test_app!();

        let first = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"name": "Alice", "email": "alice@example.com"}))
            .to_request();
        assert_eq!(test::call_service(&app, first).await.status(), StatusCode::CREATED);

        let second = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"name": "Alicia", "email": "alice@example.com"}))
            .to_request();
        assert_eq!(
            test::call_service(&app, second).await.status(),
            StatusCode::CONFLICT
        );
    }

    #[actix_web::test]
    async fn test_register_invalid_payload_is_bad_request() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"name": "", "email": "not-an-email"}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[actix_web::test]
    async fn test_get_unknown_user_is_not_found() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/users/42").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn test_get_by_email_absent_is_empty_not_found() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri("/users/email/nobody@example.com")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn test_get_by_email_returns_record() {
        let app = test_app!();

        let create = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"name": "Alice", "email": "alice@example.com"}))
            .to_request();
        test::call_service(&app, create).await;

        let req = test::TestRequest::get()
            .uri("/users/email/alice@example.com")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let user: UserResponse = test::read_body_json(resp).await;
        assert_eq!(user.email, "alice@example.com");
    }

    #[actix_web::test]
    async fn test_list_users_returns_all_records() {
        let app = test_app!();

        for (name, email) in [("Alice", "alice@example.com"), ("Bob", "bob@example.com")] {
            let req = test::TestRequest::post()
                .uri("/users")
                .set_json(json!({"name": name, "email": email}))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let users: Vec<UserResponse> = test::read_body_json(resp).await;
        assert_eq!(users.len(), 2);
    }

    #[actix_web::test]
    async fn test_partial_update_changes_only_patched_field() {
        let app = test_app!();

        let create = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"name": "Alice", "email": "alice@example.com"}))
            .to_request();
        let created: UserResponse =
            test::call_and_read_body_json(&app, create).await;

        let update = test::TestRequest::put()
            .uri(&format!("/users/{}", created.id))
            .set_json(json!({"phoneNumber": "555-1234"}))
            .to_request();
        let resp = test::call_service(&app, update).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let updated: UserResponse = test::read_body_json(resp).await;
        assert_eq!(updated.name, "Alice");
        assert_eq!(updated.email, "alice@example.com");
        assert_eq!(updated.phone_number.as_deref(), Some("555-1234"));
        assert_eq!(updated.upi_id, None);
    }

    #[actix_web::test]
    async fn test_delete_is_no_content_then_not_found() {
        let app = test_app!();

        let create = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"name": "Alice", "email": "alice@example.com"}))
            .to_request();
        let created: UserResponse =
            test::call_and_read_body_json(&app, create).await;

        let delete = test::TestRequest::delete()
            .uri(&format!("/users/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, delete).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(test::read_body(resp).await.is_empty());

        let get = test::TestRequest::get()
            .uri(&format!("/users/{}", created.id))
            .to_request();
        assert_eq!(
            test::call_service(&app, get).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
