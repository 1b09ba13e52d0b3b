//! Friends and pending friend requests.

#[cfg(test)]
#[path = "friends_test.rs"]
mod friends_test;

use leptos::prelude::*;

use crate::components::header::user_initials;
use crate::net::types::{Friend, FriendStatus};

/// Accepted friends and pending requests; declined entries are dropped.
pub fn split_by_status(friends: Vec<Friend>) -> (Vec<Friend>, Vec<Friend>) {
    friends
        .into_iter()
        .filter(|f| f.status != FriendStatus::Declined)
        .partition(|f| f.status == FriendStatus::Accepted)
}

fn friend_list(friends: Vec<Friend>) -> impl IntoView {
    view! {
        <ul class="friend-list">
            {friends
                .into_iter()
                .map(|f| {
                    let initials = user_initials(Some(&f.friend));
                    view! {
                        <li class="card friend-card">
                            <span class="avatar avatar__fallback">{initials}</span>
                            <span class="friend-card__name">{f.friend.display_name()}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn FriendsPage() -> impl IntoView {
    let friends = LocalResource::new(crate::net::api::fetch_friends);

    view! {
        <div class="friends-page">
            <h1>"Friends"</h1>
            <Suspense fallback=move || view! { <p>"Loading friends..."</p> }>
                {move || {
                    friends
                        .get()
                        .map(|list| {
                            let (accepted, pending) = split_by_status(list);
                            view! {
                                <section>
                                    <h2>{format!("Friends ({})", accepted.len())}</h2>
                                    {if accepted.is_empty() {
                                        view! { <p class="empty">"No friends yet."</p> }.into_any()
                                    } else {
                                        friend_list(accepted).into_any()
                                    }}
                                </section>
                                {(!pending.is_empty())
                                    .then(|| {
                                        view! {
                                            <section>
                                                <h2>"Pending requests"</h2>
                                                {friend_list(pending)}
                                            </section>
                                        }
                                    })}
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
