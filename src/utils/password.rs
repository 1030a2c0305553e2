//! Argon2id password hashing.
//!
//! The hash-and-verify pair is the whole contract: hashes are salted PHC
//! strings, so hashing the same password twice yields different outputs.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde_json::json;

use crate::error::AppError;

/// Hashes a plaintext password with Argon2id and a fresh random salt.
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            AppError::internal("Failed to hash password", json!({ "reason": e.to_string() }))
        })?;

    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC hash string.
///
/// A malformed stored hash verifies as false rather than erroring; the
/// caller cannot do anything better than reject the login.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("secret").unwrap();
        assert!(!verify_password("not-the-secret", &hash));
    }

    #[test]
    fn test_hashing_is_salted() {
        let first = hash_password("same-input").unwrap();
        let second = hash_password("same-input").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("same-input", &first));
        assert!(verify_password("same-input", &second));
    }

    #[test]
    fn test_malformed_hash_verifies_false() {
        assert!(!verify_password("anything", "not-a-phc-string"));
        assert!(!verify_password("anything", ""));
    }
}
