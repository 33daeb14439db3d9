//! Profile page for the signed-in member.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::identity::SessionStore;
use crate::net::types::User;

/// Stored name, or `"N/A"` for accounts that never supplied one.
fn name_label(user: &User) -> String {
    match user.name.as_deref() {
        Some(name) if !name.trim().is_empty() => name.to_owned(),
        _ => "N/A".to_owned(),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    // Anonymous visitors are sent to login once the session settles.
    crate::util::auth::install_unauth_redirect(session, use_navigate());

    view! {
        <div class="profile">
            <h2>"User Profile"</h2>
            <Show
                when=move || session.current().is_authenticated()
                fallback=|| view! { <p class="profile__loading">"Loading..."</p> }
            >
                <div class="profile__card">
                    <h3>"Profile Details"</h3>
                    <p>
                        <strong>"Name: "</strong>
                        {move || session.current().user.as_ref().map(name_label)}
                    </p>
                    <p>
                        <strong>"Email: "</strong>
                        {move || session.current().user.map(|user| user.email)}
                    </p>
                    <a class="profile__home" href="/">
                        "Back to Home"
                    </a>
                </div>
            </Show>
        </div>
    }
}
