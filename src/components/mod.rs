//! Shared UI components rendered on every route.

pub mod footer;
pub mod navbar;
