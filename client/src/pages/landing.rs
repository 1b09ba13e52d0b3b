//! Signed-out landing page with the sign-in entry point.

use leptos::prelude::*;

use crate::net::api::LOGIN_PATH;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"Ocassia"</h1>
            <p class="landing-page__tagline">
                "Never miss a birthday, anniversary, or the perfect gift again."
            </p>
            <ul class="landing-page__features">
                <li>"Keep your contacts and their important dates in one place"</li>
                <li>"Share a wishlist with friends"</li>
                <li>"Get gift ideas from the people who know you best"</li>
            </ul>
            // Login is a server redirect, not a client route.
            <a href=LOGIN_PATH rel="external" class="btn btn--primary">
                "Sign in"
            </a>
        </div>
    }
}
