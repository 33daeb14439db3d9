use super::post_resolve_route;

#[test]
fn resolved_session_routes_home() {
    assert_eq!(post_resolve_route(true), "/");
}

#[test]
fn failed_resolution_returns_to_login_with_marker() {
    assert_eq!(post_resolve_route(false), "/login?error=auth_failed");
}
