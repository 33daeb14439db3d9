//! Networking modules for the portal's HTTP API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST endpoints, `identity` owns the session store fed by
//! them, `types` defines the shared wire schema, and `error` classifies
//! request failures for callers.

pub mod api;
pub mod error;
pub mod identity;
pub mod types;
