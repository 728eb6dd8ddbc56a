//! DTOs for link management endpoints.

use crate::domain::entities::Link;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom code validation.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

/// Request to create a short link.
///
/// `target_url` is optional at the serde level so a missing field is
/// reported as a 400 validation error rather than a body rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The URL to redirect to (must be absolute HTTP/HTTPS).
    #[validate(length(min = 1, message = "target_url is required"))]
    pub target_url: Option<String>,

    /// Optional custom short code (6-8 alphanumeric characters).
    #[validate(length(min = 6, max = 8))]
    #[validate(regex(path = "*CUSTOM_CODE_REGEX"))]
    pub code: Option<String>,
}

/// A link record as returned by the API.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub click_count: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            code: link.code,
            target_url: link.target_url,
            click_count: link.click_count,
            last_clicked_at: link.last_clicked_at,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

/// Response for a successful deletion.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub success: bool,
}
