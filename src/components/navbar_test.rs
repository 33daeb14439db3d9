use super::*;

#[test]
fn dropdown_profile_label_uses_name() {
    let user = User { email: "a@b.com".to_owned(), name: Some("Alice".to_owned()) };
    assert_eq!(dropdown_profile_label(&user), "Alice");
}

#[test]
fn dropdown_profile_label_falls_back_for_missing_or_blank_name() {
    let user = User { email: "a@b.com".to_owned(), name: None };
    assert_eq!(dropdown_profile_label(&user), "User");
    let user = User { email: "a@b.com".to_owned(), name: Some("  ".to_owned()) };
    assert_eq!(dropdown_profile_label(&user), "User");
}
