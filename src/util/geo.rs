//! Browser geolocation lookup.
//!
//! Bridges the callback-based `navigator.geolocation` API into a one-shot
//! future so page code can `await` a coordinate. Requires a browser
//! environment; SSR paths resolve to the unsupported message.
//!
//! TRADE-OFFS
//! ==========
//! Failure reasons are collapsed into the user-facing strings the home page
//! shows; callers that need to distinguish denial from timeout would have to
//! extend this.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

/// Latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Ask the browser for the device's current position.
///
/// # Errors
///
/// Returns a user-facing message when geolocation is unsupported, denied,
/// or unavailable.
pub async fn current_position() -> Result<GeoPoint, String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return Err(UNSUPPORTED_MESSAGE.to_owned());
        };
        let Ok(geolocation) = window.navigator().geolocation() else {
            return Err(UNSUPPORTED_MESSAGE.to_owned());
        };

        let (tx, rx) = futures::channel::oneshot::channel::<Result<GeoPoint, String>>();
        let tx = std::rc::Rc::new(std::cell::RefCell::new(Some(tx)));

        // `once_into_js` closures free themselves after their single call.
        let tx_ok = tx.clone();
        let on_success = Closure::once_into_js(move |position: web_sys::Position| {
            let coords = position.coords();
            if let Some(tx) = tx_ok.borrow_mut().take() {
                let _ = tx.send(Ok(GeoPoint {
                    latitude: coords.latitude(),
                    longitude: coords.longitude(),
                }));
            }
        });
        let on_error = Closure::once_into_js(move |_err: web_sys::PositionError| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err(UNAVAILABLE_MESSAGE.to_owned()));
            }
        });

        if geolocation
            .get_current_position_with_error_callback(on_success.unchecked_ref(), Some(on_error.unchecked_ref()))
            .is_err()
        {
            return Err(UNAVAILABLE_MESSAGE.to_owned());
        }

        rx.await.unwrap_or_else(|_| Err(UNAVAILABLE_MESSAGE.to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(UNSUPPORTED_MESSAGE.to_owned())
    }
}

const UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported by your browser.";
#[cfg(feature = "hydrate")]
const UNAVAILABLE_MESSAGE: &str = "Unable to detect your location. Please enable location services.";
