//! Device location state machine.
//!
//! DESIGN
//! ======
//! `idle → requesting → {resolved-with-place, resolved-coords-only, failed}`.
//! Each external event (capability check, coordinate result, geocode
//! result) has its own transition method, so the machine runs without a
//! device or network. A place-name lookup failure is never an error: once
//! coordinates exist the request counts as a success.

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod geolocation_test;

use crate::net::geocode::Place;

pub const UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported by this browser";
pub const PERMISSION_DENIED_MESSAGE: &str = "Location access denied. Please enable location permissions in your browser.";
pub const POSITION_UNAVAILABLE_MESSAGE: &str = "Location information is unavailable.";
pub const TIMEOUT_MESSAGE: &str = "Location request timed out.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred while retrieving location.";

/// Options passed to the device position request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self { enable_high_accuracy: true, timeout_ms: 10_000, maximum_age_ms: 300_000 }
    }
}

/// Failure codes reported by the device, per the W3C Geolocation API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionErrorCode {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown,
}

impl PositionErrorCode {
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            _ => Self::Unknown,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::PermissionDenied => PERMISSION_DENIED_MESSAGE,
            Self::PositionUnavailable => POSITION_UNAVAILABLE_MESSAGE,
            Self::Timeout => TIMEOUT_MESSAGE,
            Self::Unknown => UNKNOWN_ERROR_MESSAGE,
        }
    }
}

/// Coordinates reported by the device.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Observable machine phase, derived from the state fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeolocationPhase {
    Idle,
    Requesting,
    ResolvedWithPlace,
    ResolvedCoordsOnly,
    Failed,
}

/// Location as last observed by the owning component. Never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeolocationState {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub loading: bool,
}

impl GeolocationState {
    /// No location capability: terminal, no request is made.
    pub fn unsupported(&mut self) {
        self.error = Some(UNSUPPORTED_MESSAGE.to_owned());
        self.loading = false;
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Coordinates arrived; the place lookup is still pending.
    pub fn coordinates_acquired(&mut self, coords: Coordinates) {
        self.latitude = Some(coords.latitude);
        self.longitude = Some(coords.longitude);
    }

    /// Finish after the place lookup. `None` means the lookup failed.
    pub fn place_resolved(&mut self, place: Option<Place>) {
        if let Some(place) = place {
            self.city = place.city;
            self.state = place.state;
        }
        self.loading = false;
        self.error = None;
    }

    /// Coordinates could not be obtained. Prior coordinates are kept.
    pub fn acquisition_failed(&mut self, code: PositionErrorCode) {
        self.loading = false;
        self.error = Some(code.message().to_owned());
    }

    pub fn has_location(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// `"City, State"`, either part alone, or empty.
    pub fn location_string(&self) -> String {
        match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) => format!("{city}, {state}"),
            (Some(only), None) | (None, Some(only)) => only.to_owned(),
            (None, None) => String::new(),
        }
    }

    pub fn phase(&self) -> GeolocationPhase {
        if self.loading {
            GeolocationPhase::Requesting
        } else if self.error.is_some() {
            GeolocationPhase::Failed
        } else if !self.has_location() {
            GeolocationPhase::Idle
        } else if self.city.is_some() || self.state.is_some() {
            GeolocationPhase::ResolvedWithPlace
        } else {
            GeolocationPhase::ResolvedCoordsOnly
        }
    }
}
