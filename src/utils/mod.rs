//! Shared utilities: short-code generation and password hashing.

pub mod password;
pub mod short_code;
