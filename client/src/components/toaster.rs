//! Notification surface rendering the shared `ToastState`.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState, ToastVariant};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast--destructive",
                    };
                    view! {
                        <div class=class>
                            <div class="toast__title">{toast.title}</div>
                            {toast.description.map(|d| view! { <div class="toast__description">{d}</div> })}
                            <button class="toast__close" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
