//! Login page: password login plus the external Google flow.
//!
//! DESIGN
//! ======
//! A successful login does not trust the login response body for identity.
//! The session cookie is set by the server, so the page asks the session
//! store to resolve again and only then routes home. The Google button leaves
//! the app entirely; the server redirects back to `/auth-callback` when the
//! provider round-trip finishes.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_query_map;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::identity::SessionStore;

/// Server route that starts the external Google login flow.
pub const GOOGLE_LOGIN_PATH: &str = "/oauth2/authorization/google";

#[cfg(feature = "hydrate")]
const REDIRECT_DELAY: std::time::Duration = std::time::Duration::from_millis(1500);

fn validate_login_input(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Enter both email and password.".to_owned());
    }
    Ok(())
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => "Login failed: Invalid email or password".to_owned(),
        ApiError::Status { message, .. } if !message.is_empty() => {
            format!("Login failed: {message}")
        }
        other => format!("Login failed: {other}"),
    }
}

/// Banner text for an `error` query parameter left by the callback route.
fn external_login_error_message(query_error: Option<&str>) -> Option<&'static str> {
    match query_error {
        Some("auth_failed") => Some("Google sign-in failed. Please try again."),
        _ => None,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Surface a failed external login reported by the callback route.
    Effect::new(move || {
        let error = query.read().get("error");
        if let Some(text) = external_login_error_message(error.as_deref()) {
            message.set(text.to_owned());
        }
    });

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(problem) = validate_login_input(&email_value, &password_value) {
            message.set(problem);
            return;
        }
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(_) => {
                        message.set("Login successful!".to_owned());
                        if let Err(err) = session.resolve(true).await {
                            leptos::logging::warn!("post-login resolve failed: {err}");
                        }
                        gloo_timers::future::sleep(REDIRECT_DELAY).await;
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        message.set(login_failed_message(&err));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &session;
        }
    };

    let on_google = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(GOOGLE_LOGIN_PATH) {
                leptos::logging::warn!("google login redirect failed: {err:?}");
            }
        }
    };

    view! {
        <div class="login">
            <h2>"Login"</h2>
            <Show when=move || !message.get().is_empty()>
                <p class="login__message">{move || message.get()}</p>
            </Show>
            <form class="login__form" on:submit=on_submit>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
            <a class="login__google" href=GOOGLE_LOGIN_PATH on:click=on_google>
                "Login with Google"
            </a>
            <p class="login__register-hint">
                "New here? " <a href="/register">"Create an account"</a>
            </p>
        </div>
    }
}
