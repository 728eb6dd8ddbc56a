//! Redirect resolution service.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// Service resolving short codes to their target URLs.
///
/// Each successful resolution records the visit: `click_count` is
/// incremented by exactly 1 and `last_clicked_at` is stamped, in a
/// single atomic store update.
pub struct RedirectService {
    repository: Arc<dyn LinkRepository>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Resolves `code` to its target URL, recording the click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active link holds the code.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let link = self.repository.record_click(code).await?.ok_or_else(|| {
            AppError::not_found("Link not found", json!({ "code": code }))
        })?;

        tracing::debug!(code = %link.code, clicks = link.click_count, "Resolved redirect");

        Ok(link.target_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Link;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_resolve_returns_target_url() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_record_click()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|code| {
                let now = Utc::now();
                Ok(Some(Link {
                    id: 1,
                    code: code.to_string(),
                    target_url: "https://example.com".to_string(),
                    click_count: 1,
                    last_clicked_at: Some(now),
                    created_at: now,
                    updated_at: now,
                    is_deleted: false,
                }))
            });

        let service = RedirectService::new(Arc::new(mock_repo));

        let url = service.resolve("abc123").await.unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_record_click()
            .times(1)
            .returning(|_| Ok(None));

        let service = RedirectService::new(Arc::new(mock_repo));

        let result = service.resolve("nosuch").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
