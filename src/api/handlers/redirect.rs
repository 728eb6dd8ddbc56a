//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The visit is recorded before the redirect is issued: `click_count`
/// is incremented by 1 and `last_clicked_at` is stamped.
///
/// Responds with 307 Temporary Redirect so clients do not cache a
/// mapping that may later be deleted.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or soft-deleted.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let target_url = state.redirect_service.resolve(&code).await?;

    Ok(Redirect::temporary(&target_url))
}
