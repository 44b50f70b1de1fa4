//! Edit Wish Form Component

use leptos::prelude::*;
use wishlist_core::admin::Panel;

use super::{use_fade, DraftSlot, FormStatusLine, WishFields, WishSelectView};
use crate::context::AdminContext;

#[component]
pub fn EditWishForm() -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext should be provided");

    let open = Signal::derive(move || ctx.read(|state| state.panels.edit));
    let hidden = use_fade(open);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.spawn(|console| async move { console.submit_edit().await });
    };

    view! {
        <section
            id="edit-section"
            class=move || if open.get() { "admin-panel is-visible" } else { "admin-panel" }
            hidden=move || hidden.get()
        >
            <header class="panel-header">
                <h2>"Wunsch bearbeiten"</h2>
                <button type="button" class="panel-close" on:click=move |_| ctx.act(|console| console.close_panel(Panel::Edit))>
                    "×"
                </button>
            </header>
            <form id="edit-form" on:submit=on_submit>
                <label for="edit-select">"Wunsch"</label>
                <WishSelectView
                    id="edit-select"
                    select=Signal::derive(move || ctx.read(|state| state.edit.select.clone()))
                    on_change=move |id: String| ctx.act(|console| console.select_for_edit(&id))
                />
                <WishFields slot=DraftSlot::Edit />
                <button type="submit" class="btn btn-primary" disabled=move || ctx.read(|state| state.edit.busy)>
                    "Aktualisieren"
                </button>
            </form>
            <FormStatusLine status=Signal::derive(move || ctx.read(|state| state.edit.status.clone())) />
        </section>
    }
}
