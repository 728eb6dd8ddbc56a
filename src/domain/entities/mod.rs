//! Core domain entities.
//!
//! [`Link`] is the sole entity of the service: a short code mapped to a
//! target URL with click metadata and a soft-delete flag. [`NewLink`]
//! carries the fields a caller supplies at creation.

pub mod link;

pub use link::{Link, NewLink};
