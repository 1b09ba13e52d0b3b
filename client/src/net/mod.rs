//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the backend through the serving process, `geocode` calls
//! the third-party reverse-geocoding service, and `types` defines the shared
//! wire schema.

pub mod api;
pub mod geocode;
pub mod types;
