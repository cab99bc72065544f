//! User service for user registration, lookup, update, and deletion.
//!
//! This is the only layer that enforces business rules: field validation,
//! email uniqueness, and existence checks all happen here, before any call
//! reaches storage.

use std::sync::Arc;

use log::{debug, info, warn};
use validator::Validate;

use crate::constants::{ERR_EMAIL_EXISTS, ERR_USER_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::{RegisterUserRequest, UpdateUserRequest, User};
use crate::repositories::UserRepository;
use crate::validators::validation_errors_to_api_error;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a new UserService over an injected repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Register a new user.
    ///
    /// The email-existence pre-check is an early exit; the unique index on
    /// `users.email` still catches inserts that race past it.
    pub async fn register(&self, req: RegisterUserRequest) -> Result<User, ApiError> {
        info!("Attempting to register user with email: {}", req.email);

        // Check if the email is already taken
        if self.repository.exists_by_email(&req.email).await? {
            warn!("Registration failed: Email {} already exists", req.email);
            return Err(ApiError::Conflict(format!(
                "{}: {}",
                ERR_EMAIL_EXISTS, req.email
            )));
        }

        // Validate the candidate record
        req.validate().map_err(validation_errors_to_api_error)?;

        let user = User {
            id: None,
            name: req.name,
            email: req.email,
            phone_number: req.phone_number,
            upi_id: req.upi_id,
        };

        let saved = self.repository.save(user).await?;
        info!(
            "User registered successfully with ID: {}",
            saved.id.unwrap_or_default()
        );
        Ok(saved)
    }

    /// Find a user by ID, failing with NotFound when no record matches.
    pub async fn get_user_by_id(&self, id: i64) -> Result<User, ApiError> {
        debug!("Fetching user with ID: {}", id);

        self.repository.find_by_id(id).await?.ok_or_else(|| {
            ApiError::NotFound(format!("{} with id: {}", ERR_USER_NOT_FOUND, id))
        })
    }

    /// Find a user by email. Absence is not an error on this path.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        debug!("Fetching user with email: {}", email);
        self.repository.find_by_email(email).await
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        debug!("Fetching all users");
        self.repository.find_all().await
    }

    /// Apply a partial update to an existing user.
    ///
    /// Present fields overwrite the stored values as-is; an email change is
    /// applied only when it differs from the current address, after a
    /// uniqueness re-check.
    pub async fn update_user(&self, id: i64, req: UpdateUserRequest) -> Result<User, ApiError> {
        info!("Updating user with ID: {}", id);

        let mut existing = self.get_user_by_id(id).await?;

        if let Some(name) = req.name {
            existing.name = name;
        }
        if let Some(phone_number) = req.phone_number {
            existing.phone_number = Some(phone_number);
        }
        if let Some(upi_id) = req.upi_id {
            existing.upi_id = Some(upi_id);
        }

        // Email update requires a uniqueness re-check
        if let Some(email) = req.email {
            if email != existing.email {
                if self.repository.exists_by_email(&email).await? {
                    warn!("Update failed: Email {} already exists", email);
                    return Err(ApiError::Conflict(format!(
                        "{}: {}",
                        ERR_EMAIL_EXISTS, email
                    )));
                }
                existing.email = email;
            }
        }

        let saved = self.repository.save(existing).await?;
        info!(
            "User updated successfully: {}",
            saved.id.unwrap_or_default()
        );
        Ok(saved)
    }

    /// Delete a user, failing with NotFound when the ID was never issued.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        info!("Deleting user with ID: {}", id);

        // Existence is checked explicitly, not inferred from the delete
        if !self.repository.exists_by_id(id).await? {
            return Err(ApiError::NotFound(format!(
                "{} with id: {}",
                ERR_USER_NOT_FOUND, id
            )));
        }

        self.repository.delete_by_id(id).await?;
        info!("User deleted successfully: {}", id);
        Ok(())
    }
}
