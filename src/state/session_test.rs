use super::*;

fn alice() -> User {
    User { email: "a@b.com".to_owned(), name: Some("Alice".to_owned()) }
}

#[test]
fn default_session_is_unresolved_and_unauthenticated() {
    let state = SessionState::default();
    assert!(!state.resolved);
    assert!(!state.is_authenticated());
    assert!(!state.is_anonymous());
}

#[test]
fn settling_with_user_authenticates_and_resolves() {
    let mut state = SessionState::default();
    state.settle(Some(alice()));
    assert!(state.resolved);
    assert!(state.is_authenticated());
    assert!(!state.is_anonymous());
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("a@b.com"));
}

#[test]
fn settling_without_user_resolves_anonymous() {
    let mut state = SessionState::default();
    state.settle(None);
    assert!(state.resolved);
    assert!(state.is_anonymous());
}

#[test]
fn clear_drops_identity_but_keeps_resolution() {
    let mut state = SessionState::default();
    state.settle(Some(alice()));
    state.clear();
    assert!(state.resolved);
    assert!(state.is_anonymous());
}

#[test]
fn resettling_replaces_a_cleared_identity() {
    let mut state = SessionState::default();
    state.settle(Some(alice()));
    state.clear();
    state.settle(Some(alice()));
    assert!(state.is_authenticated());
}
