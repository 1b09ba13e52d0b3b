//! Drives the geolocation state machine against a device and a geocoder.
//!
//! SYSTEM CONTEXT
//! ==============
//! `request_location` is environment-agnostic: the browser implementations
//! (`BrowserLocator`, `BigDataCloudGeocoder`) sit behind the `csr` feature,
//! tests plug in fakes. `use_geolocation` wires the driver into a component
//! and aborts any in-flight request when that component is cleaned up.

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod geolocation_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::geocode::Place;
use crate::state::geolocation::{Coordinates, GeolocationState, PositionErrorCode, PositionOptions};

/// Source of device coordinates.
pub trait DeviceLocator {
    fn is_supported(&self) -> bool;

    fn current_position(&self, options: PositionOptions)
    -> impl Future<Output = Result<Coordinates, PositionErrorCode>>;
}

/// Coordinate → place-name lookup.
pub trait ReverseGeocoder {
    fn reverse(&self, latitude: f64, longitude: f64) -> impl Future<Output = Result<Place, String>>;
}

/// Cancels an in-flight request. Clones share one flag.
#[derive(Clone, Debug, Default)]
pub struct AbortHandle(Arc<AtomicBool>);

impl AbortHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Run one location request to completion from a fresh state.
///
/// `on_state` sees every state assignment and each one replaces whatever the
/// caller held before, so nothing from an earlier request survives. After `abort` nothing more is
/// reported and the geocoder is not called. Retrying is the caller's job.
pub async fn request_location<L, G, F>(
    locator: &L,
    geocoder: &G,
    abort: &AbortHandle,
    mut on_state: F,
) -> GeolocationState
where
    L: DeviceLocator,
    G: ReverseGeocoder,
    F: FnMut(&GeolocationState),
{
    let mut state = GeolocationState::default();

    if !locator.is_supported() {
        state.unsupported();
        if !abort.is_aborted() {
            on_state(&state);
        }
        return state;
    }

    state.begin();
    if abort.is_aborted() {
        return state;
    }
    on_state(&state);

    let position = locator.current_position(PositionOptions::default()).await;
    if abort.is_aborted() {
        return state;
    }

    match position {
        Err(code) => state.acquisition_failed(code),
        Ok(coords) => {
            state.coordinates_acquired(coords);
            let place = geocoder.reverse(coords.latitude, coords.longitude).await;
            if abort.is_aborted() {
                return state;
            }
            match place {
                Ok(place) => state.place_resolved(Some(place)),
                Err(_e) => {
                    #[cfg(feature = "csr")]
                    log::debug!("reverse geocode failed, keeping coordinates: {_e}");
                    state.place_resolved(None);
                }
            }
        }
    }
    on_state(&state);
    state
}

/// Reactive handle returned by `use_geolocation`.
#[derive(Clone, Copy)]
pub struct Geolocation {
    pub state: RwSignal<GeolocationState>,
    pub request: Callback<()>,
}

/// Component-scoped geolocation. Call `request` to (re)acquire a location.
pub fn use_geolocation() -> Geolocation {
    let state = RwSignal::new(GeolocationState::default());
    let in_flight = StoredValue::new(None::<AbortHandle>);

    on_cleanup(move || {
        if let Some(Some(handle)) = in_flight.try_get_value() {
            handle.abort();
        }
    });

    let request = Callback::new(move |()| {
        if let Some(previous) = in_flight.get_value() {
            previous.abort();
        }
        let abort = AbortHandle::new();
        in_flight.set_value(Some(abort.clone()));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            request_location(&browser::BrowserLocator, &browser::BigDataCloudGeocoder, &abort, |s| {
                state.set(s.clone());
            })
            .await;
        });

        #[cfg(not(feature = "csr"))]
        {
            let _ = abort;
        }
    });

    Geolocation { state, request }
}

#[cfg(feature = "csr")]
pub mod browser {
    //! `navigator.geolocation` and BigDataCloud bindings.

    use std::cell::RefCell;
    use std::future::Future;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::{DeviceLocator, ReverseGeocoder};
    use crate::net::geocode::{Place, reverse_geocode};
    use crate::state::geolocation::{Coordinates, PositionErrorCode, PositionOptions};

    type PositionResult = Result<Coordinates, PositionErrorCode>;

    pub struct BrowserLocator;

    impl BrowserLocator {
        fn geolocation() -> Option<web_sys::Geolocation> {
            web_sys::window()?.navigator().geolocation().ok()
        }
    }

    impl DeviceLocator for BrowserLocator {
        fn is_supported(&self) -> bool {
            Self::geolocation().is_some()
        }

        fn current_position(&self, options: PositionOptions) -> impl Future<Output = PositionResult> {
            async move {
                let geolocation = Self::geolocation().ok_or(PositionErrorCode::Unknown)?;
                let (tx, rx) = oneshot::channel::<PositionResult>();
                let tx = Rc::new(RefCell::new(Some(tx)));

                let success_tx = Rc::clone(&tx);
                let on_success = Closure::once_into_js(move |position: web_sys::GeolocationPosition| {
                    let coords = position.coords();
                    if let Some(tx) = success_tx.borrow_mut().take() {
                        let _ = tx.send(Ok(Coordinates { latitude: coords.latitude(), longitude: coords.longitude() }));
                    }
                });
                let on_error = Closure::once_into_js(move |error: web_sys::GeolocationPositionError| {
                    if let Some(tx) = tx.borrow_mut().take() {
                        let _ = tx.send(Err(PositionErrorCode::from_code(error.code())));
                    }
                });

                let js_options = web_sys::PositionOptions::new();
                js_options.set_enable_high_accuracy(options.enable_high_accuracy);
                js_options.set_timeout(options.timeout_ms);
                js_options.set_maximum_age(options.maximum_age_ms);

                geolocation
                    .get_current_position_with_error_callback_and_options(
                        on_success.unchecked_ref::<js_sys::Function>(),
                        Some(on_error.unchecked_ref::<js_sys::Function>()),
                        &js_options,
                    )
                    .map_err(|_| PositionErrorCode::Unknown)?;

                rx.await.unwrap_or(Err(PositionErrorCode::Unknown))
            }
        }
    }

    pub struct BigDataCloudGeocoder;

    impl ReverseGeocoder for BigDataCloudGeocoder {
        fn reverse(&self, latitude: f64, longitude: f64) -> impl Future<Output = Result<Place, String>> {
            reverse_geocode(latitude, longitude)
        }
    }
}
