//! Application layer: business logic built on top of the domain contracts.

pub mod services;
