//! Contact list with a client-side name/relationship filter.

#[cfg(test)]
#[path = "contacts_test.rs"]
mod contacts_test;

use leptos::prelude::*;

use crate::net::types::Contact;

/// Case-insensitive match on name or relationship. Blank query keeps all.
pub fn filter_contacts(contacts: &[Contact], query: &str) -> Vec<Contact> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return contacts.to_vec();
    }
    contacts
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.relationship.as_deref().is_some_and(|r| r.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[component]
pub fn ContactsPage() -> impl IntoView {
    let contacts = LocalResource::new(crate::net::api::fetch_contacts);
    let query = RwSignal::new(String::new());

    view! {
        <div class="contacts-page">
            <header class="contacts-page__header">
                <h1>"Contacts"</h1>
                <input
                    class="contacts-page__search"
                    type="search"
                    placeholder="Search contacts"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </header>
            <Suspense fallback=move || view! { <p>"Loading contacts..."</p> }>
                {move || {
                    contacts
                        .get()
                        .map(|list| {
                            let shown = filter_contacts(&list, &query.get());
                            if shown.is_empty() {
                                view! { <p class="empty">"No contacts found."</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="contact-list">
                                        {shown
                                            .into_iter()
                                            .map(|c| {
                                                view! {
                                                    <li class="card contact-card">
                                                        <span class="contact-card__name">{c.name}</span>
                                                        {c.relationship.map(|r| view! { <span class="badge">{r}</span> })}
                                                        {c.email.map(|e| view! { <span class="contact-card__email">{e}</span> })}
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
