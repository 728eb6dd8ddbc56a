//! Application services orchestrating domain operations.
//!
//! - [`LinkService`] - Link registration (validation, code assignment)
//! - [`RedirectService`] - Redirect resolution with click accounting
//! - [`AdminService`] - Listing, lookup, and soft deletion

pub mod admin_service;
pub mod link_service;
pub mod redirect_service;

pub use admin_service::AdminService;
pub use link_service::LinkService;
pub use redirect_service::RedirectService;
