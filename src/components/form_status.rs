use leptos::prelude::*;
use wishlist_core::admin::FormStatus;

/// Inline status text below an admin form
#[component]
pub fn FormStatusLine(#[prop(into)] status: Signal<Option<FormStatus>>) -> impl IntoView {
    view! {
        <p
            class="form-status"
            role="status"
            data-status=move || status.with(|s| s.as_ref().map(|s| s.tone.as_str()).unwrap_or_default())
        >
            {move || status.with(|s| s.as_ref().map(|s| s.message.clone()).unwrap_or_default())}
        </p>
    }
}
