use super::*;

#[test]
fn from_status_maps_401_to_unauthorized() {
    assert_eq!(ApiError::from_status(401, "Not authenticated"), ApiError::Unauthorized);
}

#[test]
fn from_status_keeps_other_codes_with_body() {
    let err = ApiError::from_status(409, "User already exists");
    assert_eq!(err, ApiError::Status { status: 409, message: "User already exists".to_owned() });
}

#[test]
fn is_unauthorized_only_for_unauthorized_variant() {
    assert!(ApiError::Unauthorized.is_unauthorized());
    assert!(!ApiError::Network("offline".to_owned()).is_unauthorized());
    assert!(!ApiError::from_status(500, "boom").is_unauthorized());
}

#[test]
fn response_message_prefers_json_message_field() {
    let body = r#"{"message":"Forum not found with ID: 9"}"#;
    assert_eq!(response_message(body), "Forum not found with ID: 9");
}

#[test]
fn response_message_falls_back_to_json_error_field() {
    let body = r#"{"error":"bad input"}"#;
    assert_eq!(response_message(body), "bad input");
}

#[test]
fn response_message_passes_plain_text_through() {
    assert_eq!(response_message("Invalid email or password"), "Invalid email or password");
    assert_eq!(response_message("  spaced  "), "spaced");
}

#[test]
fn display_includes_status_and_message() {
    let err = ApiError::Status { status: 404, message: "missing".to_owned() };
    assert_eq!(err.to_string(), "request failed with status 404: missing");
    assert_eq!(ApiError::Unauthorized.to_string(), "not authenticated");
}
