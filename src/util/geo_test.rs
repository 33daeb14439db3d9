#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_position_reports_unsupported_off_browser() {
    let result = futures::executor::block_on(current_position());
    assert_eq!(result, Err("Geolocation is not supported by your browser.".to_owned()));
}
