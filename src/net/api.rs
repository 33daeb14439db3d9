//! REST API helpers for communicating with the portal server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the session
//! cookie carried ambiently by the browser. Server-side (SSR): stubs
//! returning [`ApiError::Unavailable`] since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>` so pages can branch on the 401
//! case (retry, session-expired messages, login redirects) and show the
//! server's own message text for everything else.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Comment, CurrentWeather, Forum, User};

/// Compile-time key for the Google weather lookup. Absence disables the
/// weather panel with an inline message instead of failing the build.
pub fn weather_api_key() -> Option<&'static str> {
    option_env!("KYN_WEATHER_API_KEY")
}

#[cfg(any(test, feature = "hydrate"))]
fn forum_endpoint(id: i64) -> String {
    format!("/api/forums/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn forum_comments_endpoint(forum_id: i64) -> String {
    format!("/api/comments/forum/{forum_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn weather_endpoint(key: &str, latitude: f64, longitude: f64) -> String {
    format!(
        "https://weather.googleapis.com/v1/currentConditions:lookup?key={key}&location.latitude={latitude}&location.longitude={longitude}"
    )
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::from_status(status, &body)
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the currently authenticated visitor from `GET /api/user/info`.
///
/// # Errors
///
/// `ApiError::Unauthorized` when no valid session cookie reached the server;
/// other variants for transport, status, and decode failures.
pub async fn fetch_session_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/user/info")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json::<User>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Log in with email and password via `POST /api/user/login`.
///
/// On success the server sets the session cookie on the response; the
/// returned record is informational only. Identity still flows through the
/// session store's own resolution.
///
/// # Errors
///
/// `ApiError::Unauthorized` for rejected credentials.
pub async fn login(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/user/login")
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json::<User>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/user/register`.
///
/// # Errors
///
/// `ApiError::Status` with status 409 when the email is already registered.
pub async fn register(name: &str, email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/user/register")
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json::<User>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Invalidate the server-side session via `POST /api/user/logout`.
///
/// The response body is a plain acknowledgment and is discarded.
///
/// # Errors
///
/// Transport or status failures; callers treat them as advisory because the
/// local session is cleared regardless.
pub async fn logout_session() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/user/logout")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch all discussion forums from `GET /api/forums`.
///
/// # Errors
///
/// Transport, status, and decode failures.
pub async fn fetch_forums() -> Result<Vec<Forum>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/forums")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json::<Vec<Forum>>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one forum from `GET /api/forums/{id}`.
///
/// # Errors
///
/// `ApiError::Status` with status 404 and the server's message for unknown
/// ids.
pub async fn fetch_forum(id: i64) -> Result<Forum, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&forum_endpoint(id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json::<Forum>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Create a forum via `POST /api/forums`.
///
/// The server stamps `createdBy` from the session; the field is still sent
/// to match the wire contract.
///
/// # Errors
///
/// `ApiError::Unauthorized` when the session has expired.
pub async fn create_forum(title: &str, description: &str, created_by: &str) -> Result<Forum, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "title": title,
            "description": description,
            "createdBy": created_by
        });
        let resp = gloo_net::http::Request::post("/api/forums")
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json::<Forum>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, description, created_by);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a forum's comments from `GET /api/comments/forum/{forumId}`,
/// oldest first.
///
/// # Errors
///
/// Transport, status, and decode failures.
pub async fn fetch_comments(forum_id: i64) -> Result<Vec<Comment>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&forum_comments_endpoint(forum_id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json::<Vec<Comment>>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = forum_id;
        Err(ApiError::Unavailable)
    }
}

/// Post a comment via `POST /api/comments/forum/{forumId}`.
///
/// # Errors
///
/// `ApiError::Unauthorized` when the session has expired;
/// `ApiError::Status` with status 404 for unknown forums.
pub async fn post_comment(forum_id: i64, content: &str) -> Result<Comment, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "content": content });
        let resp = gloo_net::http::Request::post(&forum_comments_endpoint(forum_id))
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json::<Comment>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (forum_id, content);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the five most recent forums from `GET /api/community/feed`.
///
/// # Errors
///
/// Transport, status, and decode failures.
pub async fn fetch_community_feed() -> Result<Vec<Forum>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/community/feed")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json::<Vec<Forum>>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch current conditions for a coordinate from the Google weather API.
///
/// # Errors
///
/// Transport, status, and decode failures; the home page renders them as an
/// inline message.
pub async fn fetch_current_weather(key: &str, latitude: f64, longitude: f64) -> Result<CurrentWeather, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&weather_endpoint(key, latitude, longitude))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json::<CurrentWeather>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, latitude, longitude);
        Err(ApiError::Unavailable)
    }
}
