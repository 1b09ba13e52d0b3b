//! View registry and the session-aware route decision.
//!
//! DESIGN
//! ======
//! Route tables are static and partitioned by authentication. The partition
//! is picked once per auth-state change as a tagged union, and matching is
//! plain first-exact-match over the listed entries, so the whole decision is
//! testable without a DOM.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use crate::state::auth::AuthState;

/// Every page the app can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Landing,
    Home,
    Contacts,
    Dates,
    Wishlist,
    Friends,
    Recommendations,
    Profile,
    NotFound,
}

/// One exact-match path mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: ViewId,
}

/// Ordered path table. Unmatched paths fall through to `ViewId::NotFound`.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteTable {
    entries: &'static [RouteEntry],
}

impl RouteTable {
    pub const fn new(entries: &'static [RouteEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [RouteEntry] {
        self.entries
    }

    /// First exact match wins.
    pub fn resolve(&self, path: &str) -> ViewId {
        let path = normalize_path(path);
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map_or(ViewId::NotFound, |entry| entry.view)
    }
}

pub static UNAUTHENTICATED_ROUTES: RouteTable = RouteTable::new(&[RouteEntry { path: "/", view: ViewId::Landing }]);

pub static AUTHENTICATED_ROUTES: RouteTable = RouteTable::new(&[
    RouteEntry { path: "/", view: ViewId::Home },
    RouteEntry { path: "/contacts", view: ViewId::Contacts },
    RouteEntry { path: "/dates", view: ViewId::Dates },
    RouteEntry { path: "/wishlist", view: ViewId::Wishlist },
    RouteEntry { path: "/friends", view: ViewId::Friends },
    RouteEntry { path: "/recommendations", view: ViewId::Recommendations },
    RouteEntry { path: "/profile", view: ViewId::Profile },
]);

/// Route table active for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutePartition {
    Unauthenticated(&'static RouteTable),
    Authenticated(&'static RouteTable),
}

impl RoutePartition {
    pub fn for_auth(auth: &AuthState) -> Self {
        if auth.is_authenticated() {
            Self::Authenticated(&AUTHENTICATED_ROUTES)
        } else {
            Self::Unauthenticated(&UNAUTHENTICATED_ROUTES)
        }
    }

    pub fn table(self) -> &'static RouteTable {
        match self {
            Self::Unauthenticated(table) | Self::Authenticated(table) => table,
        }
    }

    /// Navigation chrome is only shown inside an authenticated session.
    pub fn shows_header(self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// What the router outlet should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouterView {
    Loading,
    Page { view: ViewId, show_header: bool },
}

/// Decide the view for `path`. No matching happens while auth is loading.
pub fn select_view(auth: &AuthState, path: &str) -> RouterView {
    if auth.is_loading() {
        return RouterView::Loading;
    }
    let partition = RoutePartition::for_auth(auth);
    RouterView::Page { view: partition.table().resolve(path), show_header: partition.shows_header() }
}

/// Drop query/fragment and a trailing slash (except for the root).
fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}
