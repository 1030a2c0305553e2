//! Application layer: business logic services over the domain repositories.

pub mod services;
