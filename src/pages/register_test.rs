use super::{registration_failed_message, validate_registration_input};
use crate::net::error::ApiError;

#[test]
fn accepts_filled_registration() {
    assert!(validate_registration_input("Kim", "kim@example.com", "hunter2").is_ok());
}

#[test]
fn rejects_missing_fields() {
    assert!(validate_registration_input("", "kim@example.com", "hunter2").is_err());
    assert!(validate_registration_input("Kim", "  ", "hunter2").is_err());
    assert!(validate_registration_input("Kim", "kim@example.com", "").is_err());
}

#[test]
fn duplicate_account_shows_server_message() {
    let err = ApiError::from_status(409, "User already exists");
    assert_eq!(registration_failed_message(&err), "Registration failed: User already exists");
}

#[test]
fn network_failure_shows_display_text() {
    let err = ApiError::Network("connection reset".to_owned());
    assert_eq!(
        registration_failed_message(&err),
        "Registration failed: network error: connection reset"
    );
}
