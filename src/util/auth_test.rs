use super::*;
use crate::net::types::User;

#[test]
fn should_redirect_when_resolved_and_user_missing() {
    let state = SessionState { user: None, resolved: true };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_unresolved() {
    let state = SessionState { user: None, resolved: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = SessionState {
        user: Some(User { email: "a@b.com".to_owned(), name: Some("Alice".to_owned()) }),
        resolved: true,
    };
    assert!(!should_redirect_unauth(&state));
}
