//! Fallback for paths outside the active route partition.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404 Page Not Found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a href="/">"Go home"</a>
        </div>
    }
}
