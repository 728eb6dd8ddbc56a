//! Link administration service: listing, lookup, and soft deletion.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for managing existing links.
pub struct AdminService {
    repository: Arc<dyn LinkRepository>,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Returns the active link for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown or the link
    /// is soft-deleted.
    pub async fn get(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code, false)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))
    }

    /// Returns all active links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list_active().await
    }

    /// Soft-deletes the active link for `code`.
    ///
    /// The row is kept; the code becomes available for reuse. Repeated
    /// calls after the first success report not-found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active link holds the code.
    pub async fn soft_delete(&self, code: &str) -> Result<(), AppError> {
        if !self.repository.soft_delete(code).await? {
            return Err(AppError::not_found(
                "Link not found",
                json!({ "code": code }),
            ));
        }

        tracing::info!(code, "Soft-deleted link");

        Ok(())
    }
}
