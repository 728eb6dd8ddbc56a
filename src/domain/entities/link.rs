//! Link entity representing a short code to target URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A shortened URL with its click metadata.
///
/// Soft-deleted links keep their row; `is_deleted` excludes them from
/// lookups and listings and frees their code for reuse.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub click_count: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

/// Input data for creating a new link.
///
/// Counters, timestamps, and the id are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}
