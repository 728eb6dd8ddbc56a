//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link store.
///
/// The core only ever needs point lookups by code, inserts, click
/// accounting, soft deletion, and an active listing; no raw queries
/// beyond these shapes are issued.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with `click_count = 0` and fresh timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if an active link already holds the
    /// code (enforced by the store's partial unique index, which closes
    /// the check-then-insert race between concurrent creates).
    ///
    /// Returns [`AppError::Internal`] on other store errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// When `include_deleted` is false, soft-deleted rows are invisible.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_code(
        &self,
        code: &str,
        include_deleted: bool,
    ) -> Result<Option<Link>, AppError>;

    /// Atomically increments `click_count` by 1 and stamps
    /// `last_clicked_at` / `updated_at` on the active link.
    ///
    /// Returns the updated link, or `None` if no active link holds the
    /// code. A single store-side update avoids the read-then-write
    /// lost-update race under concurrent redirects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Soft-deletes the active link with the given code.
    ///
    /// Returns `true` if a link was marked deleted, `false` if the code
    /// is unknown or already deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn soft_delete(&self, code: &str) -> Result<bool, AppError>;

    /// Lists all active links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list_active(&self) -> Result<Vec<Link>, AppError>;

    /// Verifies the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
