//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! is immutable after startup: the parsed config and one pooled HTTP client
//! for forwarding API calls.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Clone is required by Axum; inner fields are Arc-wrapped or cheap clones.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend
    /// initialization failure).
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        // Auth redirects from the backend must reach the browser untouched.
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(config.proxy_timeout)
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
