//! Infrastructure layer: PostgreSQL repository implementations.

pub mod persistence;
