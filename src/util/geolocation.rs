//! Best-effort browser geolocation.
//!
//! TRADE-OFFS
//! ==========
//! Position lookups resolve to `None` on permission denial, missing
//! platform support, or timeout; never an error. Login and the nearby
//! listing treat "no location" as a first-class outcome, so nothing here
//! may block indefinitely or fail a surrounding operation.

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod geolocation_test;

use crate::net::types::GeoJsonPoint;

/// Mean Earth radius in kilometers, for Haversine distances.
const EARTH_RADIUS_KM: f64 = 6371.0;

#[cfg(feature = "hydrate")]
const POSITION_TIMEOUT_MS: u32 = 10_000;

/// A position in the UI's lat/lng order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Convert to the GeoJSON wire shape (`[lng, lat]` order).
    pub fn to_geojson(self) -> GeoJsonPoint {
        GeoJsonPoint::from_lat_lng(self.lat, self.lng)
    }
}

/// Great-circle distance between two points in kilometers.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Ask the browser for the device position once.
///
/// Resolves to `None` whenever a position cannot be produced; callers
/// proceed without a location rather than handling platform errors.
pub async fn current_position() -> Option<GeoPoint> {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use futures::channel::oneshot;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let geolocation = web_sys::window()?.navigator().geolocation().ok()?;

        let (tx, rx) = oneshot::channel::<Option<GeoPoint>>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let tx_success = Rc::clone(&tx);
        let on_success = Closure::<dyn FnMut(web_sys::Position)>::new(move |position: web_sys::Position| {
            let coords = position.coords();
            if let Some(tx) = tx_success.borrow_mut().take() {
                let _ = tx.send(Some(GeoPoint {
                    lat: coords.latitude(),
                    lng: coords.longitude(),
                }));
            }
        });

        let tx_error = Rc::clone(&tx);
        let on_error = Closure::<dyn FnMut(web_sys::PositionError)>::new(move |_err: web_sys::PositionError| {
            log::warn!("geolocation unavailable; continuing without a position");
            if let Some(tx) = tx_error.borrow_mut().take() {
                let _ = tx.send(None);
            }
        });

        let options = web_sys::PositionOptions::new();
        options.set_timeout(POSITION_TIMEOUT_MS);

        if geolocation
            .get_current_position_with_error_callback_and_options(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
                &options,
            )
            .is_err()
        {
            return None;
        }

        // The closures must outlive the browser callback; holding them
        // across the await does that.
        rx.await.ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
