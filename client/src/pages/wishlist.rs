//! The user's own wishlist, highest priority first.

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use leptos::prelude::*;

use crate::net::types::WishlistItem;

/// Sort key: `high` < `medium` < anything else.
pub fn priority_rank(priority: Option<&str>) -> u8 {
    match priority.map(str::to_ascii_lowercase).as_deref() {
        Some("high") => 0,
        Some("medium") => 1,
        Some("low") => 2,
        _ => 3,
    }
}

pub fn sort_by_priority(mut items: Vec<WishlistItem>) -> Vec<WishlistItem> {
    items.sort_by_key(|item| priority_rank(item.priority.as_deref()));
    items
}

#[component]
pub fn WishlistPage() -> impl IntoView {
    let items = LocalResource::new(crate::net::api::fetch_wishlist);

    view! {
        <div class="wishlist-page">
            <h1>"My Wishlist"</h1>
            <Suspense fallback=move || view! { <p>"Loading wishlist..."</p> }>
                {move || {
                    items
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="empty">"Your wishlist is empty."</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="wishlist">
                                        {sort_by_priority(list)
                                            .into_iter()
                                            .map(|item| {
                                                view! {
                                                    <li class="card wishlist-item">
                                                        {match item.url {
                                                            Some(url) => {
                                                                view! {
                                                                    <a href=url rel="external" target="_blank">{item.name}</a>
                                                                }
                                                                    .into_any()
                                                            }
                                                            None => view! { <span>{item.name}</span> }.into_any(),
                                                        }}
                                                        {item.price.map(|p| view! { <span class="wishlist-item__price">{p}</span> })}
                                                        {item.priority.map(|p| view! { <span class="badge">{p}</span> })}
                                                        {item.description.map(|d| view! { <p>{d}</p> })}
                                                    </li>
                                                }
                                            })
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
