//! Hover label driven by the shared `TooltipContext`.

use leptos::prelude::*;

use crate::state::ui::TooltipContext;

#[component]
pub fn Tooltip(#[prop(into)] label: Signal<String>, children: Children) -> impl IntoView {
    let delay = use_context::<TooltipContext>().unwrap_or_default().delay_ms;
    let style = format!("--tooltip-delay: {delay}ms");

    view! {
        <span class="tooltip" style=style>
            {children()}
            <span class="tooltip__label" role="tooltip">{move || label.get()}</span>
        </span>
    }
}
