//! Global navigation bar with the current user's avatar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only mounted inside an authenticated session; the router outlet decides
//! that. Highlighting is a styling concern driven by the current pathname.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::tooltip::Tooltip;
use crate::net::types::User;
use crate::state::auth::AuthContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: "/", label: "Home" },
    NavItem { path: "/contacts", label: "Contacts" },
    NavItem { path: "/dates", label: "Dates" },
    NavItem { path: "/wishlist", label: "Wishlist" },
    NavItem { path: "/friends", label: "Friends" },
    NavItem { path: "/recommendations", label: "Recommendations" },
];

pub fn is_active(item_path: &str, current_path: &str) -> bool {
    item_path == current_path
}

fn link_class(active: bool) -> &'static str {
    if active { "app-header__link app-header__link--active" } else { "app-header__link" }
}

/// First letters of first and last name, uppercased; `"U"` when neither exists.
pub fn user_initials(user: Option<&User>) -> String {
    let first = user.and_then(|u| u.first_name.as_deref()).and_then(|s| s.chars().next());
    let last = user.and_then(|u| u.last_name.as_deref()).and_then(|s| s.chars().next());
    let initials: String = first.into_iter().chain(last).flat_map(char::to_uppercase).collect();
    if initials.is_empty() { "U".to_owned() } else { initials }
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let state = auth.state;
    let pathname = use_location().pathname;

    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let path = item.path;
            view! {
                <a href=path class=move || link_class(is_active(path, &pathname.get()))>
                    {item.label}
                </a>
            }
        })
        .collect_view();

    let avatar = move || {
        let user = state.get().user;
        match user.as_ref().and_then(|u| u.profile_image_url.clone()) {
            Some(url) => view! { <img class="avatar__image" src=url alt="Profile"/> }.into_any(),
            None => view! { <span class="avatar__fallback">{user_initials(user.as_ref())}</span> }.into_any(),
        }
    };

    let display_name = move || state.get().user.map(|u| u.display_name()).unwrap_or_default();

    view! {
        <header class="app-header">
            <a href="/" class="app-header__brand">"Ocassia"</a>
            <nav class="app-header__nav">{links}</nav>
            <span class="app-header__spacer"></span>
            <Tooltip label=Signal::derive(display_name)>
                <a href="/profile" class="avatar">{avatar}</a>
            </Tooltip>
            <button class="btn app-header__logout" on:click=move |_| auth.sign_out()>
                "Sign out"
            </button>
        </header>
    }
}
