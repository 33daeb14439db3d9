use super::{
    comment_author_label, comment_failed_message, comment_posted_label, forum_error_message,
    format_timestamp, parse_forum_id,
};
use crate::net::error::ApiError;
use crate::net::types::Comment;

fn comment(created_by: Option<&str>, created_by_name: Option<&str>, created_at: Option<&str>) -> Comment {
    Comment {
        id: 7,
        content: "Count me in.".to_owned(),
        created_by: created_by.map(str::to_owned),
        created_by_name: created_by_name.map(str::to_owned),
        created_at: created_at.map(str::to_owned),
    }
}

// ==============================
// Route id parsing
// ==============================

#[test]
fn parses_positive_ids() {
    assert_eq!(parse_forum_id("12"), Some(12));
    assert_eq!(parse_forum_id("9007199254740993"), Some(9_007_199_254_740_993));
}

#[test]
fn rejects_non_ids() {
    assert_eq!(parse_forum_id("0"), None);
    assert_eq!(parse_forum_id("-3"), None);
    assert_eq!(parse_forum_id("abc"), None);
    assert_eq!(parse_forum_id("12abc"), None);
    assert_eq!(parse_forum_id(""), None);
}

// ==============================
// Forum error rendering
// ==============================

#[test]
fn server_not_found_message_passes_through() {
    let err = ApiError::from_status(404, r#"{"message":"Forum not found"}"#);
    assert_eq!(forum_error_message(&err), "Forum not found");
}

#[test]
fn transport_failures_render_not_found() {
    assert_eq!(forum_error_message(&ApiError::Network("offline".to_owned())), "Forum not found");
    assert_eq!(
        forum_error_message(&ApiError::Status { status: 500, message: String::new() }),
        "Forum not found"
    );
}

// ==============================
// Comment labels
// ==============================

#[test]
fn author_label_prefers_display_name() {
    let c = comment(Some("kim@example.com"), Some("Kim"), None);
    assert_eq!(comment_author_label(&c), "Kim");
}

#[test]
fn author_label_falls_back_to_email() {
    let c = comment(Some("kim@example.com"), Some("   "), None);
    assert_eq!(comment_author_label(&c), "kim@example.com");
    let anonymous = comment(None, None, None);
    assert_eq!(comment_author_label(&anonymous), "");
}

#[test]
fn posted_label_includes_readable_timestamp() {
    let c = comment(Some("kim@example.com"), Some("Kim"), Some("2025-08-21T09:00:00"));
    assert_eq!(comment_posted_label(&c), "Posted by: Kim on 2025-08-21 09:00:00");
}

#[test]
fn posted_label_omits_missing_timestamp() {
    let c = comment(Some("kim@example.com"), None, None);
    assert_eq!(comment_posted_label(&c), "Posted by: kim@example.com");
}

#[test]
fn timestamp_keeps_later_t_characters() {
    assert_eq!(format_timestamp("2025-08-21T09:00:00"), "2025-08-21 09:00:00");
    assert_eq!(format_timestamp("plain"), "plain");
}

// ==============================
// Comment submit failures
// ==============================

#[test]
fn unauthorized_comment_shows_server_wording() {
    assert_eq!(comment_failed_message(&ApiError::Unauthorized), "Not authenticated");
}

#[test]
fn status_message_passes_through() {
    let err = ApiError::Status { status: 404, message: "Forum not found".to_owned() };
    assert_eq!(comment_failed_message(&err), "Forum not found");
}

#[test]
fn opaque_failures_get_generic_text() {
    assert_eq!(
        comment_failed_message(&ApiError::Network("offline".to_owned())),
        "Failed to post comment"
    );
}
