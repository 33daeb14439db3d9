//! Forum list page with the member-only create form.
//!
//! DESIGN
//! ======
//! The list is a `LocalResource`; creating a forum refetches it rather than
//! patching a local copy, so ordering and server-stamped fields stay
//! authoritative. A 401 on create means the cookie expired after the page
//! resolved, so the page reports it and routes back to `/login`.

#[cfg(test)]
#[path = "forums_test.rs"]
mod forums_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::identity::SessionStore;

#[cfg(any(test, feature = "hydrate"))]
const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";
#[cfg(feature = "hydrate")]
const LOGIN_REDIRECT_DELAY: std::time::Duration = std::time::Duration::from_millis(2000);

fn validate_forum_input(title: &str, description: &str) -> Result<(), String> {
    if title.trim().is_empty() || description.trim().is_empty() {
        return Err("Give the forum a title and a description.".to_owned());
    }
    Ok(())
}

#[cfg(any(test, feature = "hydrate"))]
fn create_forum_failed_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => SESSION_EXPIRED_MESSAGE.to_owned(),
        ApiError::Status { message, .. } if !message.is_empty() => {
            format!("Failed to create forum: {message}")
        }
        other => format!("Failed to create forum: {other}"),
    }
}

#[component]
pub fn ForumsPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let forums = LocalResource::new(crate::net::api::fetch_forums);

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        // The form only renders for members, but the store can clear between
        // render and submit.
        let Some(user) = session.current_untracked().user else {
            return;
        };
        let title_value = title.get().trim().to_owned();
        let description_value = description.get().trim().to_owned();
        if let Err(problem) = validate_forum_input(&title_value, &description_value) {
            error.set(problem);
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_forum(&title_value, &description_value, &user.email)
                    .await
                {
                    Ok(_) => {
                        title.set(String::new());
                        description.set(String::new());
                        forums.refetch();
                    }
                    Err(err) => {
                        error.set(create_forum_failed_message(&err));
                        if err.is_unauthorized() {
                            crate::util::auth::spawn_login_redirect(navigate, LOGIN_REDIRECT_DELAY);
                        }
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &user;
        }
    };

    view! {
        <div class="forums">
            <h2>"Discussion Forums"</h2>

            <Show when=move || !error.get().is_empty()>
                <p class="forums__error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || session.current().is_authenticated()
                fallback=|| {
                    view! {
                        <p class="forums__login-prompt">
                            <a href="/login">"Log in"</a>
                            " to create a forum."
                        </p>
                    }
                }
            >
                <form class="forums__create" on:submit=on_create.clone()>
                    <h3>"Create a New Forum"</h3>
                    <input
                        type="text"
                        placeholder="Forum Title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Forum Description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <button type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create Forum" }}
                    </button>
                </form>
            </Show>

            <Suspense fallback=move || {
                view! { <p class="forums__loading">"Loading..."</p> }
            }>
                {move || {
                    forums
                        .get()
                        .map(|result| match result {
                            Ok(items) => {
                                items
                                    .into_iter()
                                    .map(|forum| {
                                        let link = format!("/forums/{}", forum.id);
                                        view! {
                                            <div class="forums__item">
                                                <h3>{forum.title}</h3>
                                                <p>{forum.description}</p>
                                                <p class="forums__author">
                                                    "Created by: " {forum.created_by.unwrap_or_default()}
                                                </p>
                                                <a href=link>"View Posts"</a>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                            Err(err) => {
                                leptos::logging::warn!("forum list failed: {err}");
                                view! { <p class="forums__error">"Failed to load forums"</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
