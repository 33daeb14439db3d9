//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect
//! behavior, and the redirect must wait for the session to resolve so an
//! authenticated visitor is not bounced to `/login` during startup.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::identity::SessionStore;
use crate::state::session::SessionState;

/// True when the session has settled and no identity is present.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    state.resolved && state.user.is_none()
}

/// Redirect to `/login` whenever the session has resolved anonymous.
pub fn install_unauth_redirect<F>(session: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.current()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Route to `/login` after `delay`, leaving time to read an expiry message.
#[cfg(feature = "hydrate")]
pub fn spawn_login_redirect<F>(navigate: F, delay: std::time::Duration)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        navigate("/login", NavigateOptions::default());
    });
}
