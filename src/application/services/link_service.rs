//! Link registration service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved_code, validate_custom_code};
use crate::utils::url_validator::validate_target_url;
use serde_json::json;

/// Length of auto-generated short codes.
const GENERATED_CODE_LENGTH: usize = 6;

/// Retry budget for collision-free code generation.
///
/// An inherited tunable, not a correctness guarantee: it is acceptable
/// only because the 62^6 keyspace is large relative to expected volume.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for registering new short links.
///
/// Validates input, resolves a custom or auto-generated code, and
/// persists the link. Collisions on generated codes are handled by a
/// bounded retry loop; a race lost between the collision check and the
/// insert surfaces as a conflict from the store's unique index.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short link for `target_url`.
    ///
    /// # Arguments
    ///
    /// - `target_url` - Absolute HTTP(S) URL to redirect to
    /// - `custom_code` - Optional caller-chosen code (validated if provided)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom code is
    /// malformed, [`AppError::Conflict`] if the custom code is already
    /// held by an active link, and [`AppError::Exhausted`] when all
    /// generation attempts collide.
    pub async fn create_link(
        &self,
        target_url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_target_url(&target_url)?;

        let code = if let Some(custom) = custom_code {
            validate_custom_code(&custom)?;

            if self
                .repository
                .find_by_code(&custom, false)
                .await?
                .is_some()
            {
                return Err(AppError::conflict(
                    "Code already exists",
                    json!({ "code": custom }),
                ));
            }

            custom
        } else {
            self.generate_unique_code().await?
        };

        let link = self
            .repository
            .insert(NewLink {
                code,
                target_url,
            })
            .await?;

        tracing::info!(code = %link.code, "Created short link");

        Ok(link)
    }

    /// Generates a code with no active collision, retrying on collision.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code(GENERATED_CODE_LENGTH);

            // A candidate shadowed by a service route counts as a collision.
            if is_reserved_code(&code) {
                continue;
            }

            if self.repository.find_by_code(&code, false).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::exhausted(
            "Failed to generate unique code",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}
