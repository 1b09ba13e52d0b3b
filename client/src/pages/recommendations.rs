//! Gift ideas drawn from friends' wishlists.

use leptos::prelude::*;

use crate::net::types::Recommendation;

fn recommendation_card(rec: Recommendation) -> impl IntoView {
    let for_whom = rec.for_user.as_ref().map(|u| format!("For {}", u.display_name()));
    view! {
        <li class="card recommendation-card">
            <span class="recommendation-card__item">{rec.item_name}</span>
            {for_whom.map(|w| view! { <span class="badge">{w}</span> })}
            {rec.reason.map(|r| view! { <p class="recommendation-card__reason">{r}</p> })}
            {rec.url.map(|url| view! { <a href=url rel="external" target="_blank">"View"</a> })}
        </li>
    }
}

#[component]
pub fn RecommendationsPage() -> impl IntoView {
    let recs = LocalResource::new(crate::net::api::fetch_recommendations);

    view! {
        <div class="recommendations-page">
            <h1>"Gift Recommendations"</h1>
            <Suspense fallback=move || view! { <p>"Loading recommendations..."</p> }>
                {move || {
                    recs.get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="empty">"Add friends to see what they are wishing for."</p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="recommendation-list">
                                        {list.into_iter().map(recommendation_card).collect_view()}
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
