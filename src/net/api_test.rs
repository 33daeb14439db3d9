use super::*;

#[test]
fn forum_endpoint_formats_expected_path() {
    assert_eq!(forum_endpoint(42), "/api/forums/42");
}

#[test]
fn forum_comments_endpoint_formats_expected_path() {
    assert_eq!(forum_comments_endpoint(7), "/api/comments/forum/7");
}

#[test]
fn weather_endpoint_carries_key_and_coordinates() {
    let url = weather_endpoint("k123", 3.14, 101.7);
    assert_eq!(
        url,
        "https://weather.googleapis.com/v1/currentConditions:lookup?key=k123&location.latitude=3.14&location.longitude=101.7"
    );
}

#[test]
fn weather_api_key_is_compile_time_optional() {
    // Not set in test builds; the UI degrades to an inline message.
    let _ = weather_api_key();
}
