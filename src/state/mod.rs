//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The portal keeps exactly one piece of cross-page state: the visitor's
//! session. Page-local concerns (form fields, fetched lists) stay inside
//! their page components.

pub mod session;
