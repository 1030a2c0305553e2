//! Repository trait for user accounts.

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::error::AppError;

/// Repository interface for user provisioning and credential lookup.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a user with an already-hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is taken.
    async fn create(&self, username: &str, password_hash: &str) -> Result<User, AppError>;

    /// Finds a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Lists all users, ordered by id.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Flips the active flag. Returns `false` if no such user exists.
    async fn set_active(&self, id: i64, active: bool) -> Result<bool, AppError>;

    /// Deletes a user; links and clicks go with it via cascade.
    /// Returns `false` if no such user exists.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
