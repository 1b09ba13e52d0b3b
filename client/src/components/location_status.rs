//! Current-location line with a button to (re)request the device position.
//!
//! Acquisition errors are also raised as a destructive toast. A failed
//! place-name lookup is not an error and shows the coordinates instead.

#[cfg(test)]
#[path = "location_status_test.rs"]
mod location_status_test;

use leptos::prelude::*;

use crate::state::geolocation::{GeolocationPhase, GeolocationState};
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::geolocation::Geolocation;

pub fn status_label(state: &GeolocationState) -> String {
    match state.phase() {
        GeolocationPhase::Idle => "Location not set".to_owned(),
        GeolocationPhase::Requesting => "Locating...".to_owned(),
        GeolocationPhase::Failed => state.error.clone().unwrap_or_default(),
        GeolocationPhase::ResolvedWithPlace => state.location_string(),
        GeolocationPhase::ResolvedCoordsOnly => match (state.latitude, state.longitude) {
            (Some(lat), Some(lon)) => format!("{lat:.4}, {lon:.4}"),
            _ => String::new(),
        },
    }
}

pub fn button_label(state: &GeolocationState) -> &'static str {
    match state.phase() {
        GeolocationPhase::Idle => "Use my location",
        GeolocationPhase::Requesting => "Locating...",
        GeolocationPhase::Failed => "Try again",
        GeolocationPhase::ResolvedWithPlace | GeolocationPhase::ResolvedCoordsOnly => "Refresh location",
    }
}

#[component]
pub fn LocationStatus(geo: Geolocation) -> impl IntoView {
    let state = geo.state;
    let toasts = use_context::<RwSignal<ToastState>>();

    Effect::new(move |prev: Option<Option<String>>| {
        let error = state.get().error;
        if let (Some(toasts), Some(message)) = (toasts, error.clone()) {
            if prev.flatten().as_ref() != Some(&message) {
                toasts.update(|t| {
                    t.push("Location unavailable", Some(message), ToastVariant::Destructive);
                });
            }
        }
        error
    });

    view! {
        <div class="location-status">
            <span class=move || {
                if state.get().phase() == GeolocationPhase::Failed {
                    "location-status__label location-status__label--error"
                } else {
                    "location-status__label"
                }
            }>
                {move || status_label(&state.get())}
            </span>
            <button
                class="btn"
                disabled=move || state.get().loading
                on:click=move |_| geo.request.run(())
            >
                {move || button_label(&state.get())}
            </button>
        </div>
    }
}
