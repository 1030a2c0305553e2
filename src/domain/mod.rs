//! Core business domain: entities, repository traits, and time source.

pub mod clock;
pub mod entities;
pub mod repositories;
