//! User entity owning short links.

use sqlx::FromRow;

/// An account able to create and manage short links.
///
/// Users are created by the provisioning CLI, never by the service itself.
/// `password_hash` is an opaque Argon2 PHC string.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
}
