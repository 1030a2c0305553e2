//! Click event entity.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A single redirect visit. Append-only: never updated, deleted only via
/// the owning link's cascade.
#[derive(Debug, Clone, FromRow)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
}
