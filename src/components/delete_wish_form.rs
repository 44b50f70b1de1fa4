//! Delete Wish Form Component
//!
//! Wish dropdown with a preview line; deletion asks for confirmation first.

use leptos::prelude::*;
use wishlist_core::admin::Panel;

use super::{use_fade, FormStatusLine, WishSelectView};
use crate::context::AdminContext;

#[component]
pub fn DeleteWishForm() -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext should be provided");

    let open = Signal::derive(move || ctx.read(|state| state.panels.delete));
    let hidden = use_fade(open);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.spawn(|console| async move { console.submit_delete().await });
    };

    view! {
        <section
            id="delete-section"
            class=move || if open.get() { "admin-panel is-visible" } else { "admin-panel" }
            hidden=move || hidden.get()
        >
            <header class="panel-header">
                <h2>"Wunsch löschen"</h2>
                <button type="button" class="panel-close" on:click=move |_| ctx.act(|console| console.close_panel(Panel::Delete))>
                    "×"
                </button>
            </header>
            <form id="delete-form" on:submit=on_submit>
                <label for="delete-select">"Wunsch"</label>
                <WishSelectView
                    id="delete-select"
                    select=Signal::derive(move || ctx.read(|state| state.delete.select.clone()))
                    on_change=move |id: String| ctx.act(|console| console.select_for_delete(&id))
                />
                <p class="delete-preview">{move || ctx.read(|state| state.delete.preview.clone())}</p>
                <button type="submit" class="btn btn-danger" disabled=move || ctx.read(|state| state.delete.busy)>
                    "Löschen"
                </button>
            </form>
            <FormStatusLine status=Signal::derive(move || ctx.read(|state| state.delete.status.clone())) />
        </section>
    }
}
