#![allow(dead_code)]

//! Shared test harness: an in-memory link store exercising the full
//! router without a database.

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;
use shortlink::domain::entities::{Link, NewLink};
use shortlink::domain::repositories::LinkRepository;
use shortlink::error::AppError;
use shortlink::routes::app_router;
use shortlink::state::AppState;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory [`LinkRepository`] with the same uniqueness semantics as
/// the Postgres schema: the active-code check happens inside `insert`
/// under one lock, mirroring the partial unique index.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: Mutex<Vec<Link>>,
    next_id: AtomicI64,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();

        if links.iter().any(|l| l.code == new_link.code && !l.is_deleted) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_code_active_idx" }),
            ));
        }

        let now = Utc::now();
        let link = Link {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            code: new_link.code,
            target_url: new_link.target_url,
            click_count: 0,
            last_clicked_at: None,
            created_at: now,
            updated_at: now,
            is_deleted: false,
        };
        links.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(
        &self,
        code: &str,
        include_deleted: bool,
    ) -> Result<Option<Link>, AppError> {
        let links = self.links.lock().unwrap();

        Ok(links
            .iter()
            .find(|l| l.code == code && (include_deleted || !l.is_deleted))
            .cloned())
    }

    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError> {
        let mut links = self.links.lock().unwrap();

        let Some(link) = links.iter_mut().find(|l| l.code == code && !l.is_deleted) else {
            return Ok(None);
        };

        let now = Utc::now();
        link.click_count += 1;
        link.last_clicked_at = Some(now);
        link.updated_at = now;

        Ok(Some(link.clone()))
    }

    async fn soft_delete(&self, code: &str) -> Result<bool, AppError> {
        let mut links = self.links.lock().unwrap();

        let Some(link) = links.iter_mut().find(|l| l.code == code && !l.is_deleted) else {
            return Ok(false);
        };

        link.is_deleted = true;
        link.updated_at = Utc::now();

        Ok(true)
    }

    async fn list_active(&self) -> Result<Vec<Link>, AppError> {
        let links = self.links.lock().unwrap();

        let mut active: Vec<Link> = links.iter().filter(|l| !l.is_deleted).cloned().collect();
        // Ids are monotonic, so they break timestamp ties deterministically.
        active.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        Ok(active)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Builds app state backed by a fresh in-memory store.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    (AppState::new(repository.clone()), repository)
}

/// Spins up a test server running the full application router.
pub fn create_test_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let (state, repository) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();
    (server, repository)
}
