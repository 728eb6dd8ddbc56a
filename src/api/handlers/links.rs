//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, DeleteLinkResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new short link.
///
/// # Endpoint
///
/// `POST /links`
///
/// # Request Body
///
/// ```json
/// {
///   "target_url": "https://example.com",
///   "code": "promo24"   // optional
/// }
/// ```
///
/// # Responses
///
/// - **201 Created** with the link record
/// - **400 Bad Request** on invalid URL or code format
/// - **409 Conflict** when the custom code is already active
/// - **500 Internal Server Error** on generation exhaustion or store failure
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let target_url = payload.target_url.ok_or_else(|| {
        AppError::bad_request("target_url is required", serde_json::json!({}))
    })?;

    let link = state
        .link_service
        .create_link(target_url, payload.code)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists all active links, newest first.
///
/// # Endpoint
///
/// `GET /links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.admin_service.list().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Returns a single active link by code.
///
/// # Endpoint
///
/// `GET /links/{code}`
///
/// # Responses
///
/// - **200 OK** with the link record
/// - **404 Not Found** for unknown or soft-deleted codes
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.admin_service.get(&code).await?;

    Ok(Json(link.into()))
}

/// Soft-deletes a link.
///
/// The row is retained and its code becomes available for reuse.
/// Deleting the same code twice returns 404 on the second call.
///
/// # Endpoint
///
/// `DELETE /links/{code}`
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    state.admin_service.soft_delete(&code).await?;

    Ok(Json(DeleteLinkResponse { success: true }))
}
