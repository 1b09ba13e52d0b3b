//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::components::header::Header;
use crate::components::toaster::Toaster;
use crate::pages::render_view;
use crate::routing::{RouterView, select_view};
use crate::state::auth::AuthContext;
use crate::state::toast::ToastState;
use crate::state::ui::TooltipContext;

/// Root application component.
///
/// Builds the shared contexts, starts the auth bootstrap, and tears the
/// auth context down when the app is unmounted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new();
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth.clone());
    provide_context(toasts);
    provide_context(TooltipContext::default());

    auth.bootstrap();
    on_cleanup(move || auth.teardown());

    view! {
        <Title text="Ocassia"/>
        <Router>
            <RouterOutlet/>
        </Router>
        <Toaster/>
    }
}

/// Picks the page for the current path and session.
///
/// Recomputed whenever the pathname or the auth state changes, so a
/// sign-in or sign-out swaps partitions without a reload.
#[component]
fn RouterOutlet() -> impl IntoView {
    let auth = expect_context::<AuthContext>().state;
    let pathname = use_location().pathname;
    let selected = Memo::new(move |_| select_view(&auth.get(), &pathname.get()));

    move || match selected.get() {
        RouterView::Loading => view! { <LoadingScreen/> }.into_any(),
        RouterView::Page { view: id, show_header } => view! {
            {show_header.then(|| view! { <Header/> })}
            <main class="app-main">{render_view(id)}</main>
        }
        .into_any(),
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status">
            <div class="loading-screen__spinner"></div>
        </div>
    }
}
