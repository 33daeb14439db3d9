//! Registration page for new member accounts.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;

#[cfg(feature = "hydrate")]
const REDIRECT_DELAY: std::time::Duration = std::time::Duration::from_millis(2000);

fn validate_registration_input(name: &str, email: &str, password: &str) -> Result<(), String> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err("Fill in name, email, and password.".to_owned());
    }
    Ok(())
}

#[cfg(any(test, feature = "hydrate"))]
fn registration_failed_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, .. } if !message.is_empty() => {
            format!("Registration failed: {message}")
        }
        other => format!("Registration failed: {other}"),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(problem) =
            validate_registration_input(&name_value, &email_value, &password_value)
        {
            message.set(problem);
            return;
        }
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&name_value, &email_value, &password_value).await {
                    Ok(_) => {
                        message.set("Registration successful! Redirecting to login...".to_owned());
                        gloo_timers::future::sleep(REDIRECT_DELAY).await;
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        message.set(registration_failed_message(&err));
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="register">
            <h2>"Register"</h2>
            <Show when=move || !message.get().is_empty()>
                <p class="register__message">{move || message.get()}</p>
            </Show>
            <form class="register__form" on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
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
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>
            </form>
            <p class="register__login-hint">
                "Already a member? " <a href="/login">"Login"</a>
            </p>
        </div>
    }
}
