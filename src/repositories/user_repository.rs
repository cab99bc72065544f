//! User repository for all database operations related to users.
//!
//! The [`UserRepository`] trait is the storage contract the service layer
//! depends on; [`SqliteUserRepository`] implements it over a SQLite pool.

use async_trait::async_trait;
use log::debug;
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::User;

/// Storage contract for user records.
///
/// Every call is atomic on its own; identifiers are assigned by the store
/// on insert.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, ApiError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, ApiError>;
    /// Insert the record when it has no identifier, update it otherwise.
    /// Returns the stored state, including the assigned identifier.
    async fn save(&self, user: User) -> Result<User, ApiError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError>;
    async fn find_all(&self) -> Result<Vec<User>, ApiError>;
}

/// SQLite-backed repository used in production.
#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository over an existing connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by ID: {}", id);
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, phone_number, upi_id FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by email: {}", email);
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, phone_number, upi_id FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ApiError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0 > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, ApiError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0 > 0)
    }

    async fn save(&self, user: User) -> Result<User, ApiError> {
        let id = match user.id {
            Some(id) => {
                debug!("Repository: Updating user: {}", id);
                sqlx::query(
                    "UPDATE users SET name = ?, email = ?, phone_number = ?, upi_id = ? WHERE id = ?",
                )
                .bind(&user.name)
                .bind(&user.email)
                .bind(&user.phone_number)
                .bind(&user.upi_id)
                .bind(id)
                .execute(&self.pool)
                .await?;
                id
            }
            None => {
                debug!("Repository: Inserting user with email: {}", user.email);
                let result = sqlx::query(
                    "INSERT INTO users (name, email, phone_number, upi_id) VALUES (?, ?, ?, ?)",
                )
                .bind(&user.name)
                .bind(&user.email)
                .bind(&user.phone_number)
                .bind(&user.upi_id)
                .execute(&self.pool)
                .await?;
                result.last_insert_rowid()
            }
        };

        self.find_by_id(id).await?.ok_or_else(|| {
            ApiError::InternalServerError(format!("User not found after save: {}", id))
        })
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        debug!("Repository: Deleting user: {}", id);
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, phone_number, upi_id FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(":memory:")
            .await
            .unwrap();

        sqlx::migrate!("./migrations").run(&pool).await.unwrap();

        pool
    }

    fn new_user(name: &str, email: &str) -> User {
        User {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            phone_number: None,
            upi_id: None,
        }
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = SqliteUserRepository::new(setup_test_db().await);

        let first = repo.save(new_user("Alice", "alice@example.com")).await.unwrap();
        let second = repo.save(new_user("Bob", "bob@example.com")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(first.name, "Alice");
        assert_eq!(first.phone_number, None);
    }

    #[tokio::test]
    async fn test_find_and_exists() {
        let repo = SqliteUserRepository::new(setup_test_db().await);
        let saved = repo.save(new_user("Alice", "alice@example.com")).await.unwrap();
        let id = saved.id.unwrap();

        let by_id = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "alice@example.com");

        let by_email = repo.find_by_email("alice@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, Some(id));

        assert!(repo.exists_by_id(id).await.unwrap());
        assert!(repo.exists_by_email("alice@example.com").await.unwrap());
        assert!(!repo.exists_by_id(999).await.unwrap());
        assert!(!repo.exists_by_email("nobody@example.com").await.unwrap());
        assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_with_id_updates_row() {
        let repo = SqliteUserRepository::new(setup_test_db().await);
        let mut user = repo.save(new_user("Alice", "alice@example.com")).await.unwrap();

        user.phone_number = Some("555-1234".to_string());
        let updated = repo.save(user).await.unwrap();

        assert_eq!(updated.phone_number.as_deref(), Some("555-1234"));
        assert_eq!(updated.name, "Alice");

        let count = repo.find_all().await.unwrap().len();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_violates_unique_constraint() {
        let repo = SqliteUserRepository::new(setup_test_db().await);
        repo.save(new_user("Alice", "alice@example.com")).await.unwrap();

        let err = repo
            .save(new_user("Alicia", "alice@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let repo = SqliteUserRepository::new(setup_test_db().await);
        let saved = repo.save(new_user("Alice", "alice@example.com")).await.unwrap();
        let id = saved.id.unwrap();

        repo.delete_by_id(id).await.unwrap();

        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(!repo.exists_by_id(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_all_returns_rows_in_id_order() {
        let repo = SqliteUserRepository::new(setup_test_db().await);
        repo.save(new_user("Alice", "alice@example.com")).await.unwrap();
        repo.save(new_user("Bob", "bob@example.com")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Alice");
        assert_eq!(all[1].name, "Bob");
    }
}
