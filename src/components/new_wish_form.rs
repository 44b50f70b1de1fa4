//! New Wish Form Component

use leptos::prelude::*;
use wishlist_core::admin::Panel;

use super::{use_fade, DraftSlot, FormStatusLine, WishFields};
use crate::context::AdminContext;

#[component]
pub fn NewWishForm() -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext should be provided");

    let open = Signal::derive(move || ctx.read(|state| state.panels.create));
    let hidden = use_fade(open);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.spawn(|console| async move { console.submit_create().await });
    };

    view! {
        <section
            id="create-section"
            class=move || if open.get() { "admin-panel is-visible" } else { "admin-panel" }
            hidden=move || hidden.get()
        >
            <header class="panel-header">
                <h2>"Neuer Wunsch"</h2>
                <button type="button" class="panel-close" on:click=move |_| ctx.act(|console| console.close_panel(Panel::Create))>
                    "×"
                </button>
            </header>
            <form id="wish-form" on:submit=on_submit>
                <WishFields slot=DraftSlot::Create />
                <button type="submit" class="btn btn-primary" disabled=move || ctx.read(|state| state.create.busy)>
                    "Speichern"
                </button>
            </form>
            <FormStatusLine status=Signal::derive(move || ctx.read(|state| state.create.status.clone())) />
        </section>
    }
}
