//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `geolocation`, `toast`, `ui`) so
//! components depend on small focused models. Each model is a plain struct
//! with pure transitions; components hold them in signals.

pub mod auth;
pub mod geolocation;
pub mod toast;
pub mod ui;
