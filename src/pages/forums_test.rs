use super::{SESSION_EXPIRED_MESSAGE, create_forum_failed_message, validate_forum_input};
use crate::net::error::ApiError;

#[test]
fn accepts_title_and_description() {
    assert!(validate_forum_input("Garage sales", "Trade weekend finds").is_ok());
}

#[test]
fn rejects_blank_title_or_description() {
    assert!(validate_forum_input("  ", "Trade weekend finds").is_err());
    assert!(validate_forum_input("Garage sales", "").is_err());
}

#[test]
fn expired_session_message_on_unauthorized() {
    assert_eq!(create_forum_failed_message(&ApiError::Unauthorized), SESSION_EXPIRED_MESSAGE);
}

#[test]
fn server_message_passes_through() {
    let err = ApiError::Status { status: 500, message: "title too long".to_owned() };
    assert_eq!(create_forum_failed_message(&err), "Failed to create forum: title too long");
}

#[test]
fn decode_failure_uses_display_text() {
    let err = ApiError::Decode("missing field `id`".to_owned());
    assert_eq!(
        create_forum_failed_message(&err),
        "Failed to create forum: malformed response: missing field `id`"
    );
}
