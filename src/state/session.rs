//! Session state for the current browser visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Exactly one value exists per
//! browser tab, owned by `net::identity::SessionStore`; views receive
//! read-only clones and trigger transitions through the store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Authentication state tracking the current user and resolution status.
///
/// A fresh session is *unresolved*: no who-am-i round trip has settled yet
/// and the UI should show neutral loading states instead of guessing.
/// `resolved` flips to `true` when the first resolution settles and stays
/// `true` from then on; logout drops the identity without reopening it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub resolved: bool,
}

impl SessionState {
    /// True while an identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True once resolution has settled without an identity.
    pub fn is_anonymous(&self) -> bool {
        self.resolved && self.user.is_none()
    }

    /// Terminal transition of a resolution attempt. The only place that ever
    /// sets `resolved`.
    pub(crate) fn settle(&mut self, user: Option<User>) {
        self.user = user;
        self.resolved = true;
    }

    /// Logout transition: the identity is dropped, resolution status kept.
    pub(crate) fn clear(&mut self) {
        self.user = None;
    }
}
