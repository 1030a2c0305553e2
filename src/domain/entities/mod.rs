//! Domain entities.
//!
//! Plain data structures mapping to persistent rows. Ownership: a [`User`]
//! owns its [`Link`]s, a [`Link`] owns its [`Click`]s; both cascade on delete.

mod click;
mod link;
mod user;

pub use click::Click;
pub use link::{Link, NewLink};
pub use user::User;
