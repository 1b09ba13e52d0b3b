//! REST API helpers for communicating with the backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net`, same-origin so the session
//! cookie rides along. Native builds (tests): stubs returning `None`/empty.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Vec` outputs instead of panics so a failed fetch
//! degrades a page to its empty state rather than breaking the app.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{Contact, Friend, ImportantDate, Recommendation, User, WishlistItem};

pub const CURRENT_USER_PATH: &str = "/api/auth/user";
pub const LOGIN_PATH: &str = "/api/login";
pub const LOGOUT_PATH: &str = "/api/logout";
pub const CONTACTS_PATH: &str = "/api/contacts";
pub const IMPORTANT_DATES_PATH: &str = "/api/important-dates";
pub const WISHLIST_PATH: &str = "/api/wishlist";
pub const FRIENDS_PATH: &str = "/api/friends";
pub const RECOMMENDATIONS_PATH: &str = "/api/recommendations";

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(path: &str, status: u16) -> String {
    format!("GET {path} failed: {status}")
}

/// GET a JSON body; `None` on transport error, non-2xx, or bad JSON.
async fn get_json<T: DeserializeOwned>(path: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(path).send().await.ok()?;
        if !resp.ok() {
            log::warn!("{}", request_failed_message(path, resp.status()));
            return None;
        }
        resp.json::<T>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        None
    }
}

/// Fetch the signed-in user. `None` when there is no session (401).
pub async fn fetch_current_user() -> Option<User> {
    get_json(CURRENT_USER_PATH).await
}

pub async fn fetch_contacts() -> Vec<Contact> {
    get_json(CONTACTS_PATH).await.unwrap_or_default()
}

pub async fn fetch_important_dates() -> Vec<ImportantDate> {
    get_json(IMPORTANT_DATES_PATH).await.unwrap_or_default()
}

pub async fn fetch_wishlist() -> Vec<WishlistItem> {
    get_json(WISHLIST_PATH).await.unwrap_or_default()
}

pub async fn fetch_friends() -> Vec<Friend> {
    get_json(FRIENDS_PATH).await.unwrap_or_default()
}

pub async fn fetch_recommendations() -> Vec<Recommendation> {
    get_json(RECOMMENDATIONS_PATH).await.unwrap_or_default()
}
