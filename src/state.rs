//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{AdminService, LinkService, RedirectService};
use crate::domain::repositories::LinkRepository;

/// Shared state holding the service layer.
///
/// Cloned per request; all fields are reference-counted. No mutable
/// in-process state is shared between requests, everything mutable
/// lives in the store behind [`LinkRepository`].
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub admin_service: Arc<AdminService>,
    pub repository: Arc<dyn LinkRepository>,
}

impl AppState {
    /// Builds the full service stack on top of a repository.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository.clone())),
            redirect_service: Arc::new(RedirectService::new(repository.clone())),
            admin_service: Arc::new(AdminService::new(repository.clone())),
            repository,
        }
    }
}
