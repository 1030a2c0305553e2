//! Credential verification and user provisioning.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password;

/// Verifies HTTP Basic credentials and provisions accounts.
///
/// Unknown username and wrong password are deliberately reported with the
/// same error, so the API does not leak which usernames exist.
pub struct AuthService<U: UserRepository> {
    repository: Arc<U>,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(repository: Arc<U>) -> Self {
        Self { repository }
    }

    /// Verifies a username/password pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for an unknown username or a
    /// wrong password, and [`AppError::Forbidden`] when credentials are
    /// correct but the account has been deactivated.
    pub async fn authenticate(&self, username: &str, plain: &str) -> Result<User, AppError> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| invalid_credentials())?;

        if !password::verify_password(plain, &user.password_hash) {
            return Err(invalid_credentials());
        }

        if !user.is_active {
            return Err(AppError::forbidden(
                "Account is deactivated",
                json!({ "username": username }),
            ));
        }

        Ok(user)
    }

    /// Creates a user account, hashing the password before storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken.
    pub async fn register(&self, username: &str, plain: &str) -> Result<User, AppError> {
        if username.trim().is_empty() {
            return Err(AppError::bad_request(
                "Username must not be empty",
                json!({}),
            ));
        }

        let hash = password::hash_password(plain)?;
        self.repository.create(username, &hash).await
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid username or password", json!({}))
}
