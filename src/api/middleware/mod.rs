//! Request processing middleware.

pub mod trace;
