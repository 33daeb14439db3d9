//! Session store: resolves, caches, and clears the visitor's identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is created by `App` and provided via context. It owns
//! the only writable handle to `SessionState`; pages read through
//! [`SessionStore::current`] and trigger transitions through
//! [`SessionStore::resolve`] and [`SessionStore::logout`].
//!
//! DESIGN
//! ======
//! Resolution asks `GET /api/user/info` who the session cookie belongs to.
//! An unauthorized answer on a retry-allowed attempt gets exactly one
//! second-chance request after a fixed delay: right after an external login
//! redirect the fresh cookie may not be visible to the first request yet.
//! Any other failure settles the session as anonymous; nothing retries more
//! than once. Each call takes an epoch token so a stale response, or a retry
//! still parked in its delay, never overwrites the outcome of a newer call.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::User;
use crate::state::session::SessionState;

/// Wait between an unauthorized first attempt and its single retry.
pub const RETRY_DELAY: std::time::Duration = std::time::Duration::from_millis(1000);

#[cfg(any(test, feature = "hydrate"))]
thread_local! {
    static RESOLVE_EPOCH: std::cell::Cell<u64> = const { std::cell::Cell::new(0) };
}

/// Claim a fresh epoch token for a resolution attempt, making every earlier
/// token stale.
#[cfg(any(test, feature = "hydrate"))]
fn begin_resolve() -> u64 {
    RESOLVE_EPOCH.with(|epoch| {
        let next = epoch.get() + 1;
        epoch.set(next);
        next
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn epoch_is_current(token: u64) -> bool {
    RESOLVE_EPOCH.with(|epoch| epoch.get() == token)
}

/// Make every outstanding resolution stale without starting a new one.
#[cfg(any(test, feature = "hydrate"))]
fn invalidate_resolves() {
    RESOLVE_EPOCH.with(|epoch| epoch.set(epoch.get() + 1));
}

/// One who-am-i attempt with the single bounded retry.
///
/// `fetch` is queried once; on an unauthorized answer with `allow_retry` the
/// `delay` future is awaited and `fetch` is queried a second and final time.
/// Every other failure is returned as-is.
#[cfg(any(test, feature = "hydrate"))]
async fn run_resolve<F, Fut, D, DFut>(mut fetch: F, delay: D, allow_retry: bool) -> Result<User, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<User, ApiError>>,
    D: FnOnce() -> DFut,
    DFut: Future<Output = ()>,
{
    match fetch().await {
        Ok(user) => Ok(user),
        Err(err) if err.is_unauthorized() && allow_retry => {
            delay().await;
            fetch().await
        }
        Err(err) => Err(err),
    }
}

/// Logout sequence: best-effort server call, unconditional local clear,
/// then a full navigation home. The clear and navigation never depend on the
/// server answering.
#[cfg(any(test, feature = "hydrate"))]
async fn run_logout<P, Fut, C, N>(post: P, clear: C, navigate_root: N)
where
    P: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
    C: FnOnce(),
    N: FnOnce(),
{
    if let Err(err) = post().await {
        leptos::logging::warn!("logout request failed: {err}");
    }
    clear();
    navigate_root();
}

/// Shared handle to the per-tab session state.
///
/// `Copy` so components and spawned tasks can capture it freely; all copies
/// alias the same underlying signal.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Synchronous read of the session state. Reactive when called inside a
    /// tracking closure.
    pub fn current(self) -> SessionState {
        self.state.get()
    }

    /// Read the session state without subscribing; for spawned tasks.
    pub fn current_untracked(self) -> SessionState {
        self.state.get_untracked()
    }

    /// Resolve the session against the server.
    ///
    /// On success the identity is stored and the session settles resolved.
    /// An unauthorized answer with `allow_retry` gets one retry after
    /// [`RETRY_DELAY`]; any other failure (including a failed retry) settles
    /// the session as resolved-anonymous. Either way the session ends
    /// resolved, and a stale call never overwrites a newer call's outcome.
    ///
    /// # Errors
    ///
    /// The final failure, so awaiting callers can sequence navigation on it.
    pub async fn resolve(self, allow_retry: bool) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let token = begin_resolve();
            let outcome = run_resolve(
                api::fetch_session_user,
                || gloo_timers::future::sleep(RETRY_DELAY),
                allow_retry,
            )
            .await;
            if !epoch_is_current(token) {
                // A newer call owns the state now; report our outcome only.
                return outcome.map(|_| ());
            }
            match outcome {
                Ok(user) => {
                    self.state.update(|s| s.settle(Some(user)));
                    Ok(())
                }
                Err(err) => {
                    leptos::logging::warn!("session resolve failed: {err}");
                    self.state.update(|s| s.settle(None));
                    Err(err)
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = allow_retry;
            Err(ApiError::Unavailable)
        }
    }

    /// Log the visitor out.
    ///
    /// The server call is best-effort: a failure is logged and otherwise
    /// ignored. The local identity is always cleared and the browser then
    /// performs a full navigation to `/`, restarting the app shell. Callers
    /// take no further action.
    pub async fn logout(self) {
        #[cfg(feature = "hydrate")]
        {
            // A retry parked in its delay must not resurrect the identity
            // after the clear.
            invalidate_resolves();
            run_logout(
                api::logout_session,
                || self.state.update(|s| s.clear()),
                || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                },
            )
            .await;
        }
    }

    /// Kick off the automatic startup resolution. Failure is routine for
    /// anonymous visitors and only logged.
    #[cfg(feature = "hydrate")]
    pub fn spawn_initial_resolve(self) {
        leptos::task::spawn_local(async move {
            if let Err(err) = self.resolve(true).await {
                leptos::logging::log!("session settled anonymous: {err}");
            }
        });
    }

    /// Detach in-flight resolutions from the store, including one parked in
    /// its retry delay. For teardown paths; the next `resolve` call takes
    /// over cleanly.
    pub fn invalidate(self) {
        #[cfg(any(test, feature = "hydrate"))]
        invalidate_resolves();
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
