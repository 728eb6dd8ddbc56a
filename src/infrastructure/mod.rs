//! Infrastructure layer: concrete implementations of domain contracts.
//!
//! - [`persistence`] - PostgreSQL repositories backed by sqlx

pub mod persistence;
