//! In-memory [`UserRepository`] used as a test double for the service and
//! handler tests. Mirrors the identifier-assignment behavior of the SQLite
//! implementation: ids start at 1 and grow monotonically.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::User;
use crate::repositories::UserRepository;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == Some(id)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ApiError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().any(|u| u.id == Some(id)))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, ApiError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().any(|u| u.email == email))
    }

    async fn save(&self, mut user: User) -> Result<User, ApiError> {
        let mut users = self.users.lock().unwrap();
        match user.id {
            Some(id) => {
                let pos = users.iter().position(|u| u.id == Some(id)).ok_or_else(|| {
                    ApiError::InternalServerError(format!("User not found after save: {}", id))
                })?;
                users[pos] = user.clone();
            }
            None => {
                let next_id = users.iter().filter_map(|u| u.id).max().unwrap_or(0) + 1;
                user.id = Some(next_id);
                users.push(user.clone());
            }
        }
        Ok(user)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        users.retain(|u| u.id != Some(id));
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        let users = self.users.lock().unwrap();
        Ok(users.clone())
    }
}
