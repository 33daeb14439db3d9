use super::{
    GOOGLE_LOGIN_PATH, external_login_error_message, login_failed_message, validate_login_input,
};
use crate::net::error::ApiError;

// ==============================
// Input validation
// ==============================

#[test]
fn accepts_filled_credentials() {
    assert!(validate_login_input("kim@example.com", "hunter2").is_ok());
}

#[test]
fn rejects_blank_email_or_password() {
    assert!(validate_login_input("   ", "hunter2").is_err());
    assert!(validate_login_input("kim@example.com", "").is_err());
}

// ==============================
// Failure messages
// ==============================

#[test]
fn unauthorized_maps_to_invalid_credentials() {
    let message = login_failed_message(&ApiError::Unauthorized);
    assert_eq!(message, "Login failed: Invalid email or password");
}

#[test]
fn server_message_is_shown_verbatim() {
    let err = ApiError::Status { status: 500, message: "database offline".to_owned() };
    assert_eq!(login_failed_message(&err), "Login failed: database offline");
}

#[test]
fn network_errors_fall_back_to_display() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(login_failed_message(&err), "Login failed: network error: connection refused");
}

// ==============================
// External flow
// ==============================

#[test]
fn google_path_targets_server_authorization() {
    assert_eq!(GOOGLE_LOGIN_PATH, "/oauth2/authorization/google");
}

#[test]
fn callback_error_parameter_sets_banner() {
    assert!(external_login_error_message(Some("auth_failed")).is_some());
    assert_eq!(external_login_error_message(Some("other")), None);
    assert_eq!(external_login_error_message(None), None);
}
