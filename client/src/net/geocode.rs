//! Reverse geocoding against the BigDataCloud client endpoint.
//!
//! The endpoint is keyless and CORS-enabled, so the browser calls it
//! directly rather than going through the backend.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "geocode_test.rs"]
mod geocode_test;

use serde::Deserialize;

pub const REVERSE_GEOCODE_URL: &str = "https://api.bigdatacloud.net/data/reverse-geocode-client";

/// Human-readable place for a coordinate pair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Place {
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Subset of the reverse-geocode body this app reads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub principal_subdivision: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

impl ReverseGeocodeResponse {
    /// City prefers `city` over `locality`; state prefers
    /// `principalSubdivision` over `region`. Blank strings count as absent.
    pub fn into_place(self) -> Place {
        Place {
            city: non_blank(self.city).or_else(|| non_blank(self.locality)),
            state: non_blank(self.principal_subdivision).or_else(|| non_blank(self.region)),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Full request URL for a coordinate pair.
pub fn reverse_geocode_url(latitude: f64, longitude: f64) -> String {
    format!("{REVERSE_GEOCODE_URL}?latitude={latitude}&longitude={longitude}&localityLanguage=en")
}

/// Look up the place name for a coordinate pair.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-success status, or an
/// unreadable body.
pub async fn reverse_geocode(latitude: f64, longitude: f64) -> Result<Place, String> {
    #[cfg(feature = "csr")]
    {
        let url = reverse_geocode_url(latitude, longitude);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("reverse geocode failed: {}", resp.status()));
        }
        let body: ReverseGeocodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.into_place())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (latitude, longitude);
        Err("reverse geocoding requires a browser".to_owned())
    }
}
