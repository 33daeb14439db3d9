//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: fetching its data, submitting
//! its forms, and reacting to session state through the shared store. Pages
//! never write session state directly.

pub mod about;
pub mod auth_callback;
pub mod contact;
pub mod forum_post;
pub mod forums;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod terms;
