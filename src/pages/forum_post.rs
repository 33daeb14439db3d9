//! Forum detail page: header, comment list, and the comment form.
//!
//! DESIGN
//! ======
//! The route id is parsed up front; anything unparseable short-circuits to
//! the same not-found rendering an unknown id gets from the server, without
//! issuing a request. Comments live in their own component keyed by forum id
//! so a route change rebuilds the list and the form together.

#[cfg(test)]
#[path = "forum_post_test.rs"]
mod forum_post_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

use crate::net::error::ApiError;
use crate::net::identity::SessionStore;
use crate::net::types::Comment;

const NOT_FOUND_MESSAGE: &str = "Forum not found";
#[cfg(feature = "hydrate")]
const LOGIN_REDIRECT_DELAY: std::time::Duration = std::time::Duration::from_millis(2000);

// ==============================
// Pure helpers
// ==============================

/// Forum ids are positive database keys; anything else is not found.
fn parse_forum_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

fn forum_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
        _ => NOT_FOUND_MESSAGE.to_owned(),
    }
}

/// Author line prefers the display name the server joins in; deleted
/// accounts fall back to the stored email.
fn comment_author_label(comment: &Comment) -> String {
    for candidate in [&comment.created_by_name, &comment.created_by] {
        if let Some(text) = candidate {
            if !text.trim().is_empty() {
                return text.clone();
            }
        }
    }
    String::new()
}

/// Server timestamps arrive as ISO 8601 (`2025-08-21T09:00:00`).
fn format_timestamp(raw: &str) -> String {
    raw.replacen('T', " ", 1)
}

fn comment_posted_label(comment: &Comment) -> String {
    let author = comment_author_label(comment);
    match comment.created_at.as_deref() {
        Some(ts) => format!("Posted by: {author} on {}", format_timestamp(ts)),
        None => format!("Posted by: {author}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn comment_failed_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => "Not authenticated".to_owned(),
        ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
        _ => "Failed to post comment".to_owned(),
    }
}

// ==============================
// Components
// ==============================

#[component]
pub fn ForumPostPage() -> impl IntoView {
    let params = use_params_map();
    let forum_id = Memo::new(move |_| params.read().get("id").as_deref().and_then(parse_forum_id));

    let forum = LocalResource::new(move || {
        let id = forum_id.get();
        async move {
            match id {
                Some(id) => crate::net::api::fetch_forum(id).await,
                None => {
                    Err(ApiError::Status { status: 404, message: NOT_FOUND_MESSAGE.to_owned() })
                }
            }
        }
    });

    view! {
        <div class="forum-post">
            <Suspense fallback=move || {
                view! { <p class="forum-post__loading">"Loading..."</p> }
            }>
                {move || {
                    forum
                        .get()
                        .map(|result| match result {
                            Ok(forum) => {
                                view! {
                                    <div class="forum-post__body">
                                        <div class="forum-post__header">
                                            <h2>{forum.title}</h2>
                                            <p>{forum.description}</p>
                                            <p class="forum-post__author">
                                                "Created by: " {forum.created_by.unwrap_or_default()}
                                            </p>
                                        </div>
                                        <CommentsSection forum_id=forum.id/>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <p class="forum-post__error">{forum_error_message(&err)}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
            <a class="forum-post__back" href="/forums">
                "Back to Forums"
            </a>
        </div>
    }
}

#[component]
fn CommentsSection(forum_id: i64) -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let comments = LocalResource::new(move || crate::net::api::fetch_comments(forum_id));

    let new_comment = RwSignal::new(String::new());
    let comment_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let content = new_comment.get().trim().to_owned();
        if content.is_empty() {
            comment_error.set("Comment cannot be empty".to_owned());
            return;
        }
        busy.set(true);
        comment_error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::post_comment(forum_id, &content).await {
                    Ok(_) => {
                        new_comment.set(String::new());
                        comments.refetch();
                    }
                    Err(err) => {
                        comment_error.set(comment_failed_message(&err));
                        if err.is_unauthorized() {
                            crate::util::auth::spawn_login_redirect(navigate, LOGIN_REDIRECT_DELAY);
                        }
                    }
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="forum-post__comments">
            <h3>"Comments"</h3>
            <Suspense fallback=move || {
                view! { <p class="forum-post__loading">"Loading comments..."</p> }
            }>
                {move || {
                    comments
                        .get()
                        .map(|result| match result {
                            Ok(items) if items.is_empty() => {
                                view! {
                                    <p class="forum-post__empty">
                                        "No comments yet. Be the first to comment!"
                                    </p>
                                }
                                    .into_any()
                            }
                            Ok(items) => {
                                items
                                    .into_iter()
                                    .map(|comment| {
                                        let meta = comment_posted_label(&comment);
                                        view! {
                                            <div class="forum-post__comment">
                                                <p class="forum-post__comment-body">{comment.content}</p>
                                                <p class="forum-post__comment-meta">{meta}</p>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                            Err(err) => {
                                leptos::logging::warn!("comment list failed: {err}");
                                view! {
                                    <p class="forum-post__error">"Failed to load comments"</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=move || !comment_error.get().is_empty()>
                <p class="forum-post__error">{move || comment_error.get()}</p>
            </Show>

            <Show
                when=move || session.current().is_authenticated()
                fallback=|| {
                    view! {
                        <p class="forum-post__login-prompt">
                            <a href="/login">"Log in"</a>
                            " to post a comment."
                        </p>
                    }
                }
            >
                <form class="forum-post__form" on:submit=on_submit.clone()>
                    <textarea
                        placeholder="Write a comment..."
                        prop:value=move || new_comment.get()
                        on:input=move |ev| new_comment.set(event_target_value(&ev))
                    ></textarea>
                    <button type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Posting..." } else { "Post Comment" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
