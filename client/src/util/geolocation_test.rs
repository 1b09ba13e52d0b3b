use std::cell::Cell;
use std::future::{Future, ready};

use futures::executor::block_on;

use super::*;
use crate::state::geolocation::{GeolocationPhase, PERMISSION_DENIED_MESSAGE, UNSUPPORTED_MESSAGE};

// =============================================================
// Fakes
// =============================================================

struct FakeLocator {
    supported: bool,
    result: Result<Coordinates, PositionErrorCode>,
    calls: Cell<u32>,
    abort_on_call: Option<AbortHandle>,
}

impl FakeLocator {
    fn at(latitude: f64, longitude: f64) -> Self {
        Self { supported: true, result: Ok(Coordinates { latitude, longitude }), calls: Cell::new(0), abort_on_call: None }
    }

    fn failing(code: PositionErrorCode) -> Self {
        Self { supported: true, result: Err(code), calls: Cell::new(0), abort_on_call: None }
    }

    fn unsupported() -> Self {
        Self { supported: false, ..Self::failing(PositionErrorCode::Unknown) }
    }
}

impl DeviceLocator for FakeLocator {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn current_position(
        &self,
        options: PositionOptions,
    ) -> impl Future<Output = Result<Coordinates, PositionErrorCode>> {
        assert_eq!(options, PositionOptions::default());
        self.calls.set(self.calls.get() + 1);
        if let Some(handle) = &self.abort_on_call {
            handle.abort();
        }
        ready(self.result)
    }
}

struct FakeGeocoder {
    result: Result<Place, String>,
    calls: Cell<u32>,
}

impl FakeGeocoder {
    fn place(city: &str, state: &str) -> Self {
        Self {
            result: Ok(Place { city: Some(city.to_owned()), state: Some(state.to_owned()) }),
            calls: Cell::new(0),
        }
    }

    fn network_error() -> Self {
        Self { result: Err("network error".to_owned()), calls: Cell::new(0) }
    }
}

impl ReverseGeocoder for FakeGeocoder {
    fn reverse(&self, _latitude: f64, _longitude: f64) -> impl Future<Output = Result<Place, String>> {
        self.calls.set(self.calls.get() + 1);
        ready(self.result.clone())
    }
}

fn run(locator: &FakeLocator, geocoder: &FakeGeocoder) -> (GeolocationState, Vec<GeolocationState>) {
    let mut seen = Vec::new();
    let abort = AbortHandle::new();
    let state = block_on(request_location(locator, geocoder, &abort, |s| {
        seen.push(s.clone());
    }));
    (state, seen)
}

// =============================================================
// request_location
// =============================================================

#[test]
fn unsupported_fails_without_any_request() {
    let locator = FakeLocator::unsupported();
    let geocoder = FakeGeocoder::network_error();
    let (state, seen) = run(&locator, &geocoder);
    assert_eq!(state.error.as_deref(), Some(UNSUPPORTED_MESSAGE));
    assert!(!state.loading);
    assert_eq!(locator.calls.get(), 0);
    assert_eq!(geocoder.calls.get(), 0);
    assert_eq!(seen, vec![state]);
}

#[test]
fn success_resolves_city_and_state() {
    let locator = FakeLocator::at(30.2672, -97.7431);
    let geocoder = FakeGeocoder::place("Austin", "Texas");
    let (state, seen) = run(&locator, &geocoder);
    assert_eq!(state.city.as_deref(), Some("Austin"));
    assert_eq!(state.state.as_deref(), Some("Texas"));
    assert_eq!(state.latitude, Some(30.2672));
    assert_eq!(state.longitude, Some(-97.7431));
    assert!(state.error.is_none());
    assert!(!state.loading);
    assert_eq!(state.location_string(), "Austin, Texas");
    assert_eq!(seen.len(), 2);
    assert!(seen[0].loading);
}

#[test]
fn geocode_failure_is_swallowed() {
    let locator = FakeLocator::at(1.5, 2.5);
    let geocoder = FakeGeocoder::network_error();
    let (state, _) = run(&locator, &geocoder);
    assert!(state.error.is_none());
    assert!(state.has_location());
    assert_eq!(state.phase(), GeolocationPhase::ResolvedCoordsOnly);
    assert_eq!(geocoder.calls.get(), 1);
}

#[test]
fn permission_denied_reports_message_and_skips_geocoder() {
    let locator = FakeLocator::failing(PositionErrorCode::PermissionDenied);
    let geocoder = FakeGeocoder::place("Austin", "Texas");
    let (state, _) = run(&locator, &geocoder);
    assert_eq!(state.error.as_deref(), Some(PERMISSION_DENIED_MESSAGE));
    assert!(state.latitude.is_none());
    assert!(state.longitude.is_none());
    assert_eq!(geocoder.calls.get(), 0);
}

/// Drive a request the way the hook does: every reported state overwrites `slot`.
fn run_into(slot: &mut GeolocationState, locator: &FakeLocator, geocoder: &FakeGeocoder) {
    let abort = AbortHandle::new();
    block_on(request_location(locator, geocoder, &abort, |s| *slot = s.clone()));
}

#[test]
fn repeat_request_clears_previous_error() {
    let geocoder = FakeGeocoder::place("Austin", "Texas");
    let mut slot = GeolocationState::default();
    run_into(&mut slot, &FakeLocator::failing(PositionErrorCode::Timeout), &geocoder);
    assert!(slot.error.is_some());

    run_into(&mut slot, &FakeLocator::at(1.0, 2.0), &geocoder);
    assert!(slot.error.is_none());
    assert_eq!(slot.phase(), GeolocationPhase::ResolvedWithPlace);
}

#[test]
fn repeat_request_does_not_keep_previous_place() {
    let mut slot = GeolocationState::default();
    run_into(&mut slot, &FakeLocator::at(30.2672, -97.7431), &FakeGeocoder::place("Austin", "Texas"));
    assert_eq!(slot.location_string(), "Austin, Texas");

    run_into(&mut slot, &FakeLocator::at(47.6, -122.3), &FakeGeocoder::network_error());
    assert_eq!(slot.latitude, Some(47.6));
    assert_eq!(slot.longitude, Some(-122.3));
    assert_eq!(slot.city, None);
    assert_eq!(slot.state, None);
    assert_eq!(slot.location_string(), "");
    assert_eq!(slot.phase(), GeolocationPhase::ResolvedCoordsOnly);
}

#[test]
fn repeat_request_failure_drops_previous_location() {
    let mut slot = GeolocationState::default();
    run_into(&mut slot, &FakeLocator::at(30.2672, -97.7431), &FakeGeocoder::place("Austin", "Texas"));

    run_into(&mut slot, &FakeLocator::failing(PositionErrorCode::PermissionDenied), &FakeGeocoder::network_error());
    assert_eq!(slot.error.as_deref(), Some(PERMISSION_DENIED_MESSAGE));
    assert!(!slot.has_location());
    assert_eq!(slot.location_string(), "");
}

// =============================================================
// Abort
// =============================================================

#[test]
fn abort_before_start_reports_nothing() {
    let locator = FakeLocator::at(1.0, 2.0);
    let geocoder = FakeGeocoder::place("Austin", "Texas");
    let abort = AbortHandle::new();
    abort.abort();
    let mut reports = 0;
    block_on(request_location(&locator, &geocoder, &abort, |_| reports += 1));
    assert_eq!(reports, 0);
    assert_eq!(locator.calls.get(), 0);
}

#[test]
fn abort_during_position_request_skips_geocoder() {
    let abort = AbortHandle::new();
    let locator = FakeLocator { abort_on_call: Some(abort.clone()), ..FakeLocator::at(1.0, 2.0) };
    let geocoder = FakeGeocoder::place("Austin", "Texas");
    let mut seen = Vec::new();
    block_on(request_location(&locator, &geocoder, &abort, |s| {
        seen.push(s.clone());
    }));
    assert_eq!(geocoder.calls.get(), 0);
    assert_eq!(seen.len(), 1);
    assert!(seen[0].loading);
}

#[test]
fn abort_handle_clones_share_flag() {
    let handle = AbortHandle::new();
    let clone = handle.clone();
    assert!(!clone.is_aborted());
    handle.abort();
    assert!(clone.is_aborted());
}
