//! Request and response DTOs.

pub mod health;
pub mod link;
pub mod pagination;
pub mod stats;
