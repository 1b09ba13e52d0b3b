//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its data fetching and delegates shared chrome to
//! `components`. `render_view` is the single place a `ViewId` becomes a page.

pub mod contacts;
pub mod dates;
pub mod friends;
pub mod home;
pub mod landing;
pub mod not_found;
pub mod profile;
pub mod recommendations;
pub mod wishlist;

use leptos::prelude::*;

use crate::routing::ViewId;
use contacts::ContactsPage;
use dates::DatesPage;
use friends::FriendsPage;
use home::HomePage;
use landing::LandingPage;
use not_found::NotFoundPage;
use profile::ProfilePage;
use recommendations::RecommendationsPage;
use wishlist::WishlistPage;

/// Mount the page registered for `id`.
pub fn render_view(id: ViewId) -> AnyView {
    match id {
        ViewId::Landing => view! { <LandingPage/> }.into_any(),
        ViewId::Home => view! { <HomePage/> }.into_any(),
        ViewId::Contacts => view! { <ContactsPage/> }.into_any(),
        ViewId::Dates => view! { <DatesPage/> }.into_any(),
        ViewId::Wishlist => view! { <WishlistPage/> }.into_any(),
        ViewId::Friends => view! { <FriendsPage/> }.into_any(),
        ViewId::Recommendations => view! { <RecommendationsPage/> }.into_any(),
        ViewId::Profile => view! { <ProfilePage/> }.into_any(),
        ViewId::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
