//! HTTP request handlers.

mod health;
mod links;
mod redirect;
mod stats;

pub use health::health_handler;
pub use links::{create_link_handler, deactivate_link_handler, links_list_handler};
pub use redirect::redirect_handler;
pub use stats::{link_stats_handler, stats_list_handler};
