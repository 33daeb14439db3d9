//! Landing route for the external login redirect.
//!
//! The provider round-trip ends here with the session cookie already set (or
//! not). The page's only job is to resolve the session and route onward; it
//! never renders more than a loading line.

#[cfg(test)]
#[path = "auth_callback_test.rs"]
mod auth_callback_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

/// Success goes home; failure returns to login with a marker the login page
/// turns into a banner.
#[cfg(any(test, feature = "hydrate"))]
fn post_resolve_route(resolved_ok: bool) -> &'static str {
    if resolved_ok { "/" } else { "/login?error=auth_failed" }
}

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<crate::net::identity::SessionStore>();
        let navigate = use_navigate();
        leptos::task::spawn_local(async move {
            let outcome = session.resolve(true).await;
            navigate(post_resolve_route(outcome.is_ok()), NavigateOptions::default());
        });
    }

    view! { <div class="auth-callback">"Loading..."</div> }
}
