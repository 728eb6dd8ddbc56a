//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into service operations and formats
//! responses according to the API contract.
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Link management route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
