//! Important dates ordered through the calendar year.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use leptos::prelude::*;

use crate::net::types::ImportantDate;

/// `MM-DD` of an ISO date, or the raw value when it is not ISO shaped.
pub fn month_day(date: &str) -> &str {
    date.get(5..10).filter(|md| md.as_bytes().get(2) == Some(&b'-')).unwrap_or(date)
}

/// Occasions recur yearly, so order by month and day and ignore the year.
pub fn sort_by_calendar(mut dates: Vec<ImportantDate>) -> Vec<ImportantDate> {
    dates.sort_by(|a, b| month_day(&a.date).cmp(month_day(&b.date)).then_with(|| a.title.cmp(&b.title)));
    dates
}

/// Dates falling on or after `today` (`MM-DD`), wrapping into next year.
pub fn upcoming(dates: Vec<ImportantDate>, today: &str, limit: usize) -> Vec<ImportantDate> {
    let (after, before): (Vec<_>, Vec<_>) =
        sort_by_calendar(dates).into_iter().partition(|d| month_day(&d.date) >= today);
    after.into_iter().chain(before).take(limit).collect()
}

/// Today's local `MM-DD`.
pub fn today_month_day() -> String {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        format!("{:02}-{:02}", now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "csr"))]
    {
        "01-01".to_owned()
    }
}

#[component]
pub fn DateRow(date: ImportantDate) -> impl IntoView {
    let who = date.contact_name.clone().unwrap_or_default();
    view! {
        <li class="date-row">
            <span class="date-row__day">{month_day(&date.date).to_owned()}</span>
            <span class="date-row__title">{date.title.clone()}</span>
            <span class="badge">{date.kind.label()}</span>
            <span class="date-row__contact">{who}</span>
        </li>
    }
}

#[component]
pub fn DatesPage() -> impl IntoView {
    let dates = LocalResource::new(crate::net::api::fetch_important_dates);

    view! {
        <div class="dates-page">
            <h1>"Important Dates"</h1>
            <Suspense fallback=move || view! { <p>"Loading dates..."</p> }>
                {move || {
                    dates
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="empty">"No dates yet."</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="date-list">
                                        {sort_by_calendar(list)
                                            .into_iter()
                                            .map(|date| view! { <DateRow date=date/> })
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
