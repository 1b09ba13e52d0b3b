//! Signed-in dashboard: greeting, location, and the next few occasions.

use leptos::prelude::*;

use crate::components::location_status::LocationStatus;
use crate::pages::dates::{DateRow, today_month_day, upcoming};
use crate::state::auth::AuthContext;
use crate::util::geolocation::use_geolocation;

const UPCOMING_LIMIT: usize = 5;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let state = auth.state;
    let geo = use_geolocation();
    let dates = LocalResource::new(crate::net::api::fetch_important_dates);

    let greeting = move || {
        let name = state.get().user.and_then(|u| u.first_name).unwrap_or_default();
        if name.is_empty() { "Welcome back!".to_owned() } else { format!("Welcome back, {name}!") }
    };

    view! {
        <div class="home-page">
            <h1>{greeting}</h1>
            <LocationStatus geo=geo/>
            <section class="home-page__upcoming">
                <h2>"Coming up"</h2>
                <Suspense fallback=move || view! { <p>"Loading dates..."</p> }>
                    {move || {
                        dates
                            .get()
                            .map(|list| {
                                let next = upcoming(list, &today_month_day(), UPCOMING_LIMIT);
                                if next.is_empty() {
                                    view! {
                                        <p class="empty">
                                            "Nothing coming up. "
                                            <a href="/dates">"Add a date"</a>
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <ul class="date-list">
                                            {next.into_iter().map(|date| view! { <DateRow date=date/> }).collect_view()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
