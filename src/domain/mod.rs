//! Domain layer containing business entities and data access contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or
//! presentation layers; repository traits are implemented in
//! [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
