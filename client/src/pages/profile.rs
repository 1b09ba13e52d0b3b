//! Profile page: account details and the device location.

use leptos::prelude::*;

use crate::components::header::user_initials;
use crate::components::location_status::LocationStatus;
use crate::state::auth::AuthContext;
use crate::util::geolocation::use_geolocation;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let state = auth.state;
    let geo = use_geolocation();

    let name = move || state.get().user.map(|u| u.display_name()).unwrap_or_default();
    let email = move || state.get().user.and_then(|u| u.email).unwrap_or_default();
    let initials = move || user_initials(state.get().user.as_ref());

    view! {
        <div class="profile-page">
            <div class="card profile-card">
                <span class="avatar avatar--large avatar__fallback">{initials}</span>
                <h1>{name}</h1>
                <p class="profile-card__email">{email}</p>
            </div>
            <section>
                <h2>"Location"</h2>
                <p>"Used to suggest local gift ideas."</p>
                <LocationStatus geo=geo/>
            </section>
        </div>
    }
}
