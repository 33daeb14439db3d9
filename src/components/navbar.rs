//! Top navigation bar with session-aware links and the profile dropdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! The link list stays hidden until the session resolves so the bar never
//! flashes Register/Login at a visitor who is about to be recognized.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::net::identity::SessionStore;
use crate::net::types::User;

/// Label for the profile entry inside the dropdown.
fn dropdown_profile_label(user: &User) -> String {
    match user.name.as_deref() {
        Some(name) if !name.trim().is_empty() => name.to_owned(),
        _ => "User".to_owned(),
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let menu_open = RwSignal::new(false);

    let profile_label = move || {
        session
            .current()
            .user
            .map(|user| dropdown_profile_label(&user))
            .unwrap_or_else(|| "User".to_owned())
    };

    let on_logout = move |_| {
        menu_open.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            session.logout().await;
        });
    };

    view! {
        <nav class="navbar">
            <h1 class="navbar__brand">"Know-Your-Neighborhood"</h1>
            <Show when=move || session.current().resolved>
                <ul class="navbar__links">
                    <li><a href="/">"Home"</a></li>
                    <li><a href="/contact">"Contact Us"</a></li>
                    <li><a href="/about">"About Us"</a></li>
                    <li><a href="/forums">"Forums"</a></li>
                    <Show
                        when=move || session.current().is_authenticated()
                        fallback=|| {
                            view! {
                                <li><a href="/register">"Register"</a></li>
                                <li><a href="/login">"Login"</a></li>
                            }
                        }
                    >
                        <li class="navbar__menu">
                            <button
                                class="navbar__menu-toggle"
                                on:click=move |_| menu_open.update(|open| *open = !*open)
                            >
                                "My Profile"
                            </button>
                            <Show when=move || menu_open.get()>
                                <div class="navbar__menu-items">
                                    <a href="/profile" on:click=move |_| menu_open.set(false)>
                                        {profile_label}
                                    </a>
                                    <button class="navbar__logout" on:click=on_logout>
                                        "Logout"
                                    </button>
                                </div>
                            </Show>
                        </li>
                    </Show>
                </ul>
            </Show>
        </nav>
    }
}
