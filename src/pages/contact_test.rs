use super::validate_contact_input;

#[test]
fn accepts_complete_submission() {
    assert!(validate_contact_input("Kim", "kim@example.com", "The park gate is broken.").is_ok());
}

#[test]
fn rejects_any_blank_field() {
    assert!(validate_contact_input("", "kim@example.com", "hello").is_err());
    assert!(validate_contact_input("Kim", "   ", "hello").is_err());
    assert!(validate_contact_input("Kim", "kim@example.com", "\n").is_err());
}
