use super::name_label;
use crate::net::types::User;

#[test]
fn shows_stored_name() {
    let user = User { email: "kim@example.com".to_owned(), name: Some("Kim".to_owned()) };
    assert_eq!(name_label(&user), "Kim");
}

#[test]
fn missing_or_blank_name_shows_placeholder() {
    let missing = User { email: "kim@example.com".to_owned(), name: None };
    assert_eq!(name_label(&missing), "N/A");
    let blank = User { email: "kim@example.com".to_owned(), name: Some("  ".to_owned()) };
    assert_eq!(name_label(&blank), "N/A");
}
